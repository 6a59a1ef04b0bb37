//! Parsers for the free-text cells found in the spreadsheet exports.
//!
//! None of these fail: unparseable input yields `None`, a default, or an empty list, and the
//! caller decides whether to skip the row.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static GOAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)골").expect("goal pattern is a valid regex"));
static ASSIST_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)도움").expect("assist pattern is a valid regex"));
static DATE_TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{4}\.\s*\d{1,2}\.\s*\d{1,2}").expect("date token pattern is a valid regex")
});

/// Whitespace handling applied before a date format is tried
#[derive(Clone, Copy)]
enum DateInput {
    /// All whitespace removed, e.g. "2026. 2. 15" becomes "2026.2.15"
    Compact,
    /// Only surrounding whitespace removed
    Trimmed,
}

/// Date formats tried in order, first success wins
const DATE_FORMATS: [(DateInput, &str); 2] = [
    (DateInput::Compact, "%Y.%m.%d"),
    (DateInput::Trimmed, "%Y. %m. %d"),
];

/// Parses "2026.2.15" or "2026. 2. 15" style dates.
///
/// # Returns
/// - `Some(NaiveDate)` - One of the accepted formats matched
/// - `None` - Empty input or no format matched (e.g. "15/2/2026")
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_FORMATS.iter().find_map(|(input, format)| {
        let candidate = match input {
            DateInput::Compact => trimmed.split_whitespace().collect::<String>(),
            DateInput::Trimmed => trimmed.to_string(),
        };

        NaiveDate::parse_from_str(&candidate, format).ok()
    })
}

/// Parses an integer after discarding everything but digits and minus signs.
///
/// # Returns
/// The parsed value, or `default` when nothing numeric remains
pub fn parse_int(value: &str, default: i32) -> i32 {
    let digits: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();

    digits.parse().unwrap_or(default)
}

/// One "name count+unit" line of a goal/assist block
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalAssistLine {
    pub player_name: String,
    pub goals: i32,
    pub assists: i32,
}

/// Parses a line such as "장현규 1골", "우형오 1도움" or "송민규 1골1도움".
///
/// Everything before the last space is the player name; the token after it carries the
/// counts, a digit run followed by "골" for goals and by "도움" for assists.
///
/// # Returns
/// - `Some(GoalAssistLine)` - A named player with at least one goal or assist
/// - `None` - No space, an empty name, or neither count present
pub fn parse_goal_assist_line(line: &str) -> Option<GoalAssistLine> {
    let line = line.trim();
    let split_at = line.rfind(' ').filter(|index| *index > 0)?;

    let player_name = line[..split_at].trim();
    let token = line[split_at + 1..].trim();

    let goals = unit_count(&GOAL_PATTERN, token);
    let assists = unit_count(&ASSIST_PATTERN, token);

    if player_name.is_empty() || (goals <= 0 && assists <= 0) {
        return None;
    }

    Some(GoalAssistLine {
        player_name: player_name.to_string(),
        goals: goals.max(0),
        assists: assists.max(0),
    })
}

/// Digit run captured by `pattern` in `token`, 0 when absent
fn unit_count(pattern: &Regex, token: &str) -> i32 {
    pattern
        .captures(token)
        .and_then(|captures| captures.get(1))
        .map(|count| parse_int(count.as_str(), 0))
        .unwrap_or(0)
}

/// Parses every line of a goal/assist cell, dropping lines that contribute nothing
pub fn parse_goal_assist_block(text: &str) -> Vec<GoalAssistLine> {
    text.lines().filter_map(parse_goal_assist_line).collect()
}

/// Splits a comma separated attendee cell into trimmed, non-empty names
pub fn parse_name_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Latest date written anywhere in the given cells
pub fn latest_date_in<'c, I>(cells: I) -> Option<NaiveDate>
where
    I: IntoIterator<Item = &'c str>,
{
    cells
        .into_iter()
        .flat_map(|cell| DATE_TOKEN_PATTERN.find_iter(cell))
        .filter_map(|token| parse_date(token.as_str()))
        .max()
}
