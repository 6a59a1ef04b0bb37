use chrono::NaiveDate;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UpcomingMatchModel, TestContext};

impl TestContext {
    pub fn upcoming<'a>(&'a mut self) -> UpcomingFixtures<'a> {
        UpcomingFixtures { setup: self }
    }
}

pub struct UpcomingFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UpcomingFixtures<'a> {
    pub async fn insert_upcoming_match(
        &self,
        match_date: NaiveDate,
        opponent: &str,
    ) -> Result<UpcomingMatchModel, TestError> {
        Ok(
            entity::prelude::UpcomingMatch::insert(entity::upcoming_match::ActiveModel {
                match_date: ActiveValue::Set(match_date),
                match_time: ActiveValue::Set(None),
                opponent: ActiveValue::Set(opponent.to_string()),
                venue: ActiveValue::Set(None),
                memo: ActiveValue::Set(None),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
