use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::season::SeasonTally;

pub struct SeasonStatsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeasonStatsRepository<'a, C> {
    /// Creates a new instance of [`SeasonStatsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Row of the most recent season
    pub async fn get_latest(&self) -> Result<Option<entity::season_stats::Model>, DbErr> {
        entity::prelude::SeasonStats::find()
            .order_by_desc(entity::season_stats::Column::SeasonYear)
            .one(self.db)
            .await
    }

    pub async fn find_by_year(
        &self,
        season_year: i32,
    ) -> Result<Option<entity::season_stats::Model>, DbErr> {
        entity::prelude::SeasonStats::find()
            .filter(entity::season_stats::Column::SeasonYear.eq(season_year))
            .one(self.db)
            .await
    }

    /// Stores the tally for the year, inserting the row if the year has none yet
    ///
    /// `total_matches` is always written as the sum of the outcome counters.
    pub async fn save(
        &self,
        season_year: i32,
        tally: SeasonTally,
    ) -> Result<entity::season_stats::Model, DbErr> {
        match self.find_by_year(season_year).await? {
            Some(existing) => {
                let mut season_am = existing.into_active_model();
                season_am.total_matches = ActiveValue::Set(tally.total_matches());
                season_am.wins = ActiveValue::Set(tally.wins);
                season_am.draws = ActiveValue::Set(tally.draws);
                season_am.losses = ActiveValue::Set(tally.losses);

                season_am.update(self.db).await
            }
            None => {
                let season = entity::season_stats::ActiveModel {
                    season_year: ActiveValue::Set(season_year),
                    total_matches: ActiveValue::Set(tally.total_matches()),
                    wins: ActiveValue::Set(tally.wins),
                    draws: ActiveValue::Set(tally.draws),
                    losses: ActiveValue::Set(tally.losses),
                    ..Default::default()
                };

                season.insert(self.db).await
            }
        }
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::SeasonStats::find().count(self.db).await
    }
}
