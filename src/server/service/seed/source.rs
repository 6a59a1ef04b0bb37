//! Readers for the four spreadsheet exports.
//!
//! Files are read with the `csv` crate in flexible mode without header handling; header rows
//! are interpreted by [`ColumnResolver`] so that a mangled header still falls back to the
//! column's usual position.

use std::{
    collections::{HashMap, HashSet},
    path::Path,
};

use chrono::NaiveDate;

use crate::{
    model::game::MatchResult,
    server::{
        error::seed::SeedError,
        model::{game::MatchFields, season::SeasonTally},
        service::seed::{
            dataset::{MatchSeed, SeasonSeed, SeedDataset},
            parse::{
                latest_date_in, parse_date, parse_goal_assist_block, parse_int, parse_name_list,
            },
        },
    },
};

/// Roster export, one player name per row under a "선수명" header
pub const ROSTER_FILE: &str = "goal_assist.csv";
/// Dashboard export holding the season totals
pub const DASHBOARD_FILE: &str = "dashboard.csv";
/// Form responses, one played match per row
pub const RESULTS_FILE: &str = "response.csv";
/// Attendance sheet whose first row lists match dates
pub const ATTENDANCE_FILE: &str = "attendance.csv";

/// Season the dashboard totals are recorded under
pub const DASHBOARD_SEASON_YEAR: i32 = 2026;

/// Zero-based row of the dashboard holding the totals
const DASHBOARD_TOTALS_ROW: usize = 3;
/// Column offsets of total, wins, draws and losses in the dashboard totals row
const DASHBOARD_TOTAL_COLUMN: usize = 0;
const DASHBOARD_WINS_COLUMN: usize = 2;
const DASHBOARD_DRAWS_COLUMN: usize = 4;
const DASHBOARD_LOSSES_COLUMN: usize = 6;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Looks up cells by header name, falling back to a fixed position.
pub struct ColumnResolver {
    columns: HashMap<String, usize>,
}

impl ColumnResolver {
    /// Indexes the header row; a leading byte order mark and surrounding whitespace are ignored
    pub fn from_header(header: &[String]) -> Self {
        let columns = header
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let name = name.trim().trim_start_matches(BYTE_ORDER_MARK).trim();
                (name.to_string(), index)
            })
            .collect();

        Self { columns }
    }

    /// Cell under the `name` column, or at `fallback` when the header lacks it.
    ///
    /// Returns an empty string when the row has neither cell.
    pub fn get<'r>(&self, row: &'r [String], name: &str, fallback: usize) -> &'r str {
        self.columns
            .get(name)
            .and_then(|index| row.get(*index))
            .or_else(|| row.get(fallback))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Reads every row of a CSV file as raw cells.
///
/// Bytes that are not valid UTF-8 are decoded as U+FFFD, so a badly encoded cell never
/// costs more than that cell.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>, SeedError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| SeedError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

    reader
        .byte_records()
        .map(|record| {
            record
                .map(|record| {
                    record
                        .iter()
                        .map(|cell| String::from_utf8_lossy(cell).into_owned())
                        .collect()
                })
                .map_err(|source| SeedError::MalformedSource {
                    path: path.to_path_buf(),
                    source,
                })
        })
        .collect()
}

/// Player names from the roster export, blank and repeated names skipped
pub fn parse_roster(rows: &[Vec<String>]) -> Vec<String> {
    let Some((header, body)) = rows.split_first() else {
        return Vec::new();
    };
    let columns = ColumnResolver::from_header(header);

    let mut seen = HashSet::new();
    body.iter()
        .map(|row| columns.get(row, "선수명", 0).trim())
        .filter(|name| !name.is_empty() && seen.insert(name.to_string()))
        .map(str::to_string)
        .collect()
}

/// Season totals from the fixed position of the dashboard export.
///
/// A sheet too short to hold the totals row yields an all-zero season. The stored match total
/// is always the sum of the outcome counts; a sheet total that disagrees is logged and ignored.
pub fn parse_season_summary(rows: &[Vec<String>]) -> SeasonSeed {
    let Some(row) = rows.get(DASHBOARD_TOTALS_ROW) else {
        tracing::warn!(
            "Dashboard has {} rows, no totals row; recording an empty season",
            rows.len()
        );
        return SeasonSeed {
            season_year: DASHBOARD_SEASON_YEAR,
            tally: SeasonTally::default(),
        };
    };

    let cell = |index: usize| parse_int(row.get(index).map(String::as_str).unwrap_or(""), 0);
    let tally = SeasonTally::new(
        cell(DASHBOARD_WINS_COLUMN),
        cell(DASHBOARD_DRAWS_COLUMN),
        cell(DASHBOARD_LOSSES_COLUMN),
    );

    let sheet_total = cell(DASHBOARD_TOTAL_COLUMN);
    if sheet_total != tally.total_matches() {
        tracing::warn!(
            sheet_total = %sheet_total,
            computed_total = %tally.total_matches(),
            "Dashboard match total disagrees with wins + draws + losses; using the sum"
        );
    }

    SeasonSeed {
        season_year: DASHBOARD_SEASON_YEAR,
        tally,
    }
}

/// Played matches from the results export; rows without a parseable date are skipped
pub fn parse_match_rows(rows: &[Vec<String>]) -> Vec<MatchSeed> {
    let Some((header, body)) = rows.split_first() else {
        return Vec::new();
    };
    let columns = ColumnResolver::from_header(header);

    body.iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let raw_date = columns.get(row, "경기일", 0);
            let Some(match_date) = parse_date(raw_date) else {
                if !raw_date.trim().is_empty() {
                    tracing::warn!(
                        row = %(index + 2),
                        "Skipping match row with unparseable date {:?}",
                        raw_date
                    );
                }
                return None;
            };

            let fields = MatchFields {
                match_date,
                match_time: None,
                opponent: columns.get(row, "상대팀", 1).trim().to_string(),
                our_score: parse_int(columns.get(row, "우리득점", 2), 0).max(0),
                opponent_score: parse_int(columns.get(row, "상대득점", 3), 0).max(0),
            };

            let label = columns.get(row, "판정", 4).trim();
            if !label.is_empty() && MatchResult::from_label(label) != Some(fields.result()) {
                tracing::warn!(
                    match_date = %match_date,
                    "Result label {:?} disagrees with score {}:{}; using {}",
                    label,
                    fields.our_score,
                    fields.opponent_score,
                    fields.result().label()
                );
            }

            Some(MatchSeed {
                attendee_names: parse_name_list(columns.get(row, "참석자", 5)),
                goal_assists: parse_goal_assist_block(columns.get(row, "골도움기록", 6)),
                fields,
            })
        })
        .collect()
}

/// Latest match date listed in the first row of the attendance sheet
pub fn parse_upcoming_date(rows: &[Vec<String>]) -> Option<NaiveDate> {
    rows.first()
        .and_then(|row| latest_date_in(row.iter().map(String::as_str)))
}

impl SeedDataset {
    /// Reads all four exports from `seed_dir` before anything is written.
    ///
    /// # Returns
    /// - `Ok(SeedDataset)` - Every export was readable
    /// - `Err(SeedError)` - An export is missing or not valid CSV
    pub fn load(seed_dir: &Path) -> Result<Self, SeedError> {
        let roster_rows = read_rows(&seed_dir.join(ROSTER_FILE))?;
        let dashboard_rows = read_rows(&seed_dir.join(DASHBOARD_FILE))?;
        let results_rows = read_rows(&seed_dir.join(RESULTS_FILE))?;
        let attendance_rows = read_rows(&seed_dir.join(ATTENDANCE_FILE))?;

        Ok(Self {
            roster: parse_roster(&roster_rows),
            season: parse_season_summary(&dashboard_rows),
            matches: parse_match_rows(&results_rows),
            upcoming_date: parse_upcoming_date(&attendance_rows),
        })
    }
}
