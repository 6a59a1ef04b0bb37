use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Outcome of a match from the club's point of view.
///
/// Stored and serialized using the Korean labels the club's records use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
pub enum MatchResult {
    #[serde(rename = "승")]
    Win,
    #[serde(rename = "무")]
    Draw,
    #[serde(rename = "패")]
    Loss,
}

impl MatchResult {
    /// Derive the result from the final score.
    pub fn from_scores(our_score: i32, opponent_score: i32) -> Self {
        match our_score.cmp(&opponent_score) {
            std::cmp::Ordering::Greater => Self::Win,
            std::cmp::Ordering::Less => Self::Loss,
            std::cmp::Ordering::Equal => Self::Draw,
        }
    }

    /// The label persisted in the `game.result` column.
    pub fn label(self) -> &'static str {
        match self {
            Self::Win => "승",
            Self::Draw => "무",
            Self::Loss => "패",
        }
    }

    /// Parse a stored label, returning `None` for anything unrecognised.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "승" => Some(Self::Win),
            "무" => Some(Self::Draw),
            "패" => Some(Self::Loss),
            _ => None,
        }
    }
}

/// A played match
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub id: i32,
    pub match_date: NaiveDate,
    pub match_time: Option<NaiveTime>,
    pub opponent: String,
    pub our_score: i32,
    pub opponent_score: i32,
    pub result: MatchResult,
}

/// One player's goals and assists in a match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoalAssistRecordItemDto {
    pub player_id: Option<i32>,
    #[serde(default)]
    pub goals: i32,
    #[serde(default)]
    pub assists: i32,
}

/// Request body for creating or updating a match
///
/// `match_date` is optional at the wire level so that a missing date is reported as a
/// validation error rather than a deserialization failure.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchDto {
    pub match_date: Option<NaiveDate>,
    #[serde(default)]
    pub match_time: Option<NaiveTime>,
    #[serde(default)]
    pub opponent: Option<String>,
    #[serde(default)]
    pub our_score: i32,
    #[serde(default)]
    pub opponent_score: i32,
    #[serde(default)]
    pub attendee_player_ids: Vec<i32>,
    #[serde(default)]
    pub goal_assist_records: Vec<GoalAssistRecordItemDto>,
}

/// A match with its roster and goal/assist records, used to prefill the edit form
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetailDto {
    pub id: i32,
    pub match_date: NaiveDate,
    pub match_time: Option<NaiveTime>,
    pub opponent: String,
    pub our_score: i32,
    pub opponent_score: i32,
    pub result: MatchResult,
    pub attendee_player_ids: Vec<i32>,
    pub goal_assist_records: Vec<GoalAssistRecordItemDto>,
}
