use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::SeasonStatsModel, TestContext};

impl TestContext {
    pub fn season<'a>(&'a mut self) -> SeasonFixtures<'a> {
        SeasonFixtures { setup: self }
    }
}

pub struct SeasonFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> SeasonFixtures<'a> {
    /// Insert a season tally; `total_matches` is derived from the outcome counts.
    pub async fn insert_season_stats(
        &self,
        season_year: i32,
        wins: i32,
        draws: i32,
        losses: i32,
    ) -> Result<SeasonStatsModel, TestError> {
        Ok(
            entity::prelude::SeasonStats::insert(entity::season_stats::ActiveModel {
                season_year: ActiveValue::Set(season_year),
                total_matches: ActiveValue::Set(wins + draws + losses),
                wins: ActiveValue::Set(wins),
                draws: ActiveValue::Set(draws),
                losses: ActiveValue::Set(losses),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
