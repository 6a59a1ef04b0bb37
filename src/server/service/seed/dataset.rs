//! Canonical seed data, independent of where it came from.
//!
//! Both the CSV exports and the built-in fallback are turned into a [`SeedDataset`] and written
//! by the same writer.

use chrono::NaiveDate;

use crate::server::{
    model::{game::MatchFields, season::SeasonTally},
    service::seed::parse::GoalAssistLine,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeasonSeed {
    pub season_year: i32,
    pub tally: SeasonTally,
}

/// A played match with its roster referenced by player name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchSeed {
    pub fields: MatchFields,
    pub attendee_names: Vec<String>,
    pub goal_assists: Vec<GoalAssistLine>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedDataset {
    /// Player names in roster order, without duplicates
    pub roster: Vec<String>,
    pub season: SeasonSeed,
    pub matches: Vec<MatchSeed>,
    /// Date of the next match, scheduled with placeholder details
    pub upcoming_date: Option<NaiveDate>,
}
