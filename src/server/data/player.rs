use std::collections::{HashMap, HashSet};

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    /// Creates a new instance of [`PlayerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str) -> Result<entity::player::Model, DbErr> {
        let player = entity::player::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            phone_number: ActiveValue::Set(None),
            ..Default::default()
        };

        player.insert(self.db).await
    }

    pub async fn find_by_id(&self, player_id: i32) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find_by_id(player_id)
            .one(self.db)
            .await
    }

    /// Exact, case-sensitive name lookup
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Returns the player with the given name, creating them if they don't exist yet
    pub async fn get_or_create(&self, name: &str) -> Result<entity::player::Model, DbErr> {
        match self.find_by_name(name).await? {
            Some(player) => Ok(player),
            None => self.create(name).await,
        }
    }

    /// All players sorted by name
    pub async fn get_all_by_name(&self) -> Result<Vec<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .order_by_asc(entity::player::Column::Name)
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await
    }

    /// Map of player ID to player name for every player
    pub async fn get_names(&self) -> Result<HashMap<i32, String>, DbErr> {
        let players = entity::prelude::Player::find().all(self.db).await?;

        Ok(players
            .into_iter()
            .map(|player| (player.id, player.name))
            .collect())
    }

    /// Filters the provided IDs down to those belonging to an existing player
    pub async fn get_existing_ids(&self, player_ids: &[i32]) -> Result<HashSet<i32>, DbErr> {
        if player_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let players = entity::prelude::Player::find()
            .filter(entity::player::Column::Id.is_in(player_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(players.into_iter().map(|player| player.id).collect())
    }

    /// Overwrites the player's phone number, `None` clears it
    ///
    /// Returns `Ok(None)` if the player does not exist.
    pub async fn update_phone_number(
        &self,
        player_id: i32,
        phone_number: Option<String>,
    ) -> Result<Option<entity::player::Model>, DbErr> {
        let player = match self.find_by_id(player_id).await? {
            Some(player) => player,
            None => return Ok(None),
        };

        let mut player_am = player.into_active_model();
        player_am.phone_number = ActiveValue::Set(phone_number);

        let player = player_am.update(self.db).await?;

        Ok(Some(player))
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Player::find().count(self.db).await
    }
}
