use crate::model::{game::MatchResult, season::SeasonStatsDto};
use crate::server::model::db::SeasonStatsModel;

/// Win/draw/loss counters of one season.
///
/// The match total is not stored separately: it is always the sum of the three counters, so
/// it can never disagree with them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeasonTally {
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
}

impl SeasonTally {
    pub fn new(wins: i32, draws: i32, losses: i32) -> Self {
        Self {
            wins: wins.max(0),
            draws: draws.max(0),
            losses: losses.max(0),
        }
    }

    pub fn total_matches(&self) -> i32 {
        self.wins + self.draws + self.losses
    }

    /// Counts one more match with the given result
    pub fn record(self, result: MatchResult) -> Self {
        let mut tally = self;
        match result {
            MatchResult::Win => tally.wins += 1,
            MatchResult::Draw => tally.draws += 1,
            MatchResult::Loss => tally.losses += 1,
        }
        tally
    }

    /// Removes one match with the given result, never dropping a counter below zero
    pub fn revert(self, result: MatchResult) -> Self {
        let mut tally = self;
        let counter = match result {
            MatchResult::Win => &mut tally.wins,
            MatchResult::Draw => &mut tally.draws,
            MatchResult::Loss => &mut tally.losses,
        };
        *counter = (*counter - 1).max(0);
        tally
    }

    pub fn into_dto(self, season_year: i32) -> SeasonStatsDto {
        SeasonStatsDto {
            season_year,
            total_matches: self.total_matches(),
            wins: self.wins,
            draws: self.draws,
            losses: self.losses,
        }
    }
}

impl From<&SeasonStatsModel> for SeasonTally {
    fn from(model: &SeasonStatsModel) -> Self {
        Self::new(model.wins, model.draws, model.losses)
    }
}
