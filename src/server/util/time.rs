//! Calendar helpers.

use chrono::{DateTime, Datelike, Utc};

/// Season year reported when no season tally has been recorded yet.
///
/// # Arguments
/// - `now` - Current UTC timestamp
///
/// # Returns
/// The calendar year of `now`
pub fn current_season_year(now: DateTime<Utc>) -> i32 {
    now.year()
}
