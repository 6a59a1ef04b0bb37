use crate::{model::player::PlayerListItemDto, server::model::db::PlayerModel};

impl From<PlayerModel> for PlayerListItemDto {
    fn from(player: PlayerModel) -> Self {
        Self {
            id: player.id,
            name: player.name,
            phone_number: player.phone_number,
        }
    }
}
