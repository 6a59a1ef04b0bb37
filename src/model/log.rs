use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One player's goal/assist contribution in one match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoalAssistLogDto {
    pub match_id: i32,
    pub match_date: NaiveDate,
    pub opponent: String,
    pub player_name: String,
    pub goals: i32,
    pub assists: i32,
}

/// Players who attended one match, sorted by name
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceLogDto {
    pub match_id: i32,
    pub match_date: NaiveDate,
    pub opponent: String,
    pub attended_player_names: Vec<String>,
}
