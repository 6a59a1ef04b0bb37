use sea_orm::DatabaseConnection;

use crate::{
    model::player::{PlayerListItemDto, UpdatePlayerPhoneDto},
    server::{
        data::player::PlayerRepository,
        error::{player::PlayerError, Error},
        util::text::non_blank,
    },
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    /// Creates a new instance of [`PlayerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Roster sorted by name, with phone numbers
    pub async fn list_players(&self) -> Result<Vec<PlayerListItemDto>, Error> {
        let players = PlayerRepository::new(self.db).get_all_by_name().await?;

        Ok(players.into_iter().map(PlayerListItemDto::from).collect())
    }

    /// Sets or clears a player's phone number.
    ///
    /// The number is trimmed; blank or missing input clears it.
    ///
    /// # Returns
    /// - `Ok(PlayerListItemDto)` - The updated player
    /// - `Err(Error::PlayerError(PlayerError::PlayerNotFound))` - No player with that ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_phone_number(
        &self,
        player_id: i32,
        request: UpdatePlayerPhoneDto,
    ) -> Result<PlayerListItemDto, Error> {
        let phone_number = non_blank(request.phone_number.as_deref());

        let player = PlayerRepository::new(self.db)
            .update_phone_number(player_id, phone_number)
            .await?
            .ok_or(PlayerError::PlayerNotFound(player_id))?;

        tracing::info!(player_id = %player_id, "Updated phone number");

        Ok(player.into())
    }
}

#[cfg(test)]
mod tests {
    use navi_test_utils::prelude::*;

    use super::*;

    /// Expect players sorted by name with their phone numbers
    #[tokio::test]
    async fn lists_players_by_name() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_ledger_tables().build().await?;
        test.player()
            .insert_player_with_phone("정준희", "010-2222-3333")
            .await?;
        test.player().insert_player("김재린").await?;

        let player_service = PlayerService::new(&test.db);
        let players = player_service.list_players().await.unwrap();

        let lines: Vec<(&str, Option<&str>)> = players
            .iter()
            .map(|player| (player.name.as_str(), player.phone_number.as_deref()))
            .collect();
        assert_eq!(
            lines,
            vec![("김재린", None), ("정준희", Some("010-2222-3333"))]
        );

        Ok(())
    }

    /// Expect the number to be trimmed before it is stored
    #[tokio::test]
    async fn trims_phone_number() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_ledger_tables()
            .with_player("이승준")
            .build()
            .await?;

        let player_service = PlayerService::new(&test.db);
        let updated = player_service
            .update_phone_number(
                1,
                UpdatePlayerPhoneDto {
                    phone_number: Some("  010-1234-5678 ".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.phone_number, Some("010-1234-5678".to_string()));

        Ok(())
    }

    /// Expect a blank number to clear the stored value rather than store ""
    #[tokio::test]
    async fn blank_phone_number_clears_value() -> Result<(), TestError> {
        let mut test = TestBuilder::new().with_ledger_tables().build().await?;
        let player = test
            .player()
            .insert_player_with_phone("이승준", "010-1234-5678")
            .await?;

        let player_service = PlayerService::new(&test.db);
        let updated = player_service
            .update_phone_number(
                player.id,
                UpdatePlayerPhoneDto {
                    phone_number: Some("   ".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.phone_number, None);
        let stored = PlayerRepository::new(&test.db)
            .find_by_id(player.id)
            .await?
            .expect("player exists");
        assert_eq!(stored.phone_number, None);

        Ok(())
    }

    /// Expect not found for an unknown player
    #[tokio::test]
    async fn fails_for_unknown_player() -> Result<(), TestError> {
        let test = TestBuilder::new().with_ledger_tables().build().await?;

        let player_service = PlayerService::new(&test.db);
        let result = player_service
            .update_phone_number(3, UpdatePlayerPhoneDto::default())
            .await;

        assert!(matches!(
            result,
            Err(Error::PlayerError(PlayerError::PlayerNotFound(3)))
        ));

        Ok(())
    }
}
