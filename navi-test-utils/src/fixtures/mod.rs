//! Database fixture utilities.
//!
//! Each submodule adds an accessor on [`TestContext`](crate::TestContext) returning a fixture
//! helper for one part of the ledger:
//!
//! - `player` - roster entries
//! - `game` - played matches with their attendance and goal/assist rows
//! - `season` - season tallies
//! - `upcoming` - scheduled matches

pub mod game;
pub mod player;
pub mod season;
pub mod upcoming;

use chrono::NaiveDate;

/// Build a calendar date for fixtures.
///
/// # Panics
/// Panics if the date does not exist, which is a bug in the test itself.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date must be valid")
}
