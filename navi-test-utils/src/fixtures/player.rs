use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::PlayerModel, TestContext};

impl TestContext {
    pub fn player<'a>(&'a mut self) -> PlayerFixtures<'a> {
        PlayerFixtures { setup: self }
    }
}

pub struct PlayerFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> PlayerFixtures<'a> {
    pub async fn insert_player(&self, name: &str) -> Result<PlayerModel, TestError> {
        Ok(
            entity::prelude::Player::insert(entity::player::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                phone_number: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_player_with_phone(
        &self,
        name: &str,
        phone_number: &str,
    ) -> Result<PlayerModel, TestError> {
        Ok(
            entity::prelude::Player::insert(entity::player::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                phone_number: ActiveValue::Set(Some(phone_number.to_string())),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
