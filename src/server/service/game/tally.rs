//! Incremental maintenance of the per-year season tally.
//!
//! Every match mutation adjusts exactly one counter of one season row; the tally is never
//! recomputed from the match table.

use sea_orm::{ConnectionTrait, DbErr};

use crate::{
    model::game::MatchResult,
    server::{data::season_stats::SeasonStatsRepository, model::season::SeasonTally},
};

/// Counts a match in its season, creating the season row if the year has none
pub async fn record_result<C: ConnectionTrait>(
    db: &C,
    season_year: i32,
    result: MatchResult,
) -> Result<(), DbErr> {
    let season_repo = SeasonStatsRepository::new(db);

    let tally = season_repo
        .find_by_year(season_year)
        .await?
        .map(|season| SeasonTally::from(&season))
        .unwrap_or_default();

    season_repo.save(season_year, tally.record(result)).await?;

    Ok(())
}

/// Removes a match from its season, clamping each counter at zero
///
/// A year without a season row has nothing to remove and is left untouched.
pub async fn revert_result<C: ConnectionTrait>(
    db: &C,
    season_year: i32,
    result: MatchResult,
) -> Result<(), DbErr> {
    let season_repo = SeasonStatsRepository::new(db);

    let Some(season) = season_repo.find_by_year(season_year).await? else {
        tracing::warn!(
            season_year = %season_year,
            "No season tally to revert a {} result from",
            result.label()
        );
        return Ok(());
    };

    season_repo
        .save(season_year, SeasonTally::from(&season).revert(result))
        .await?;

    Ok(())
}
