use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A match the player attended, with their contribution in it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMatchRecordDto {
    pub match_id: i32,
    pub match_date: NaiveDate,
    pub opponent: String,
    pub goals: i32,
    pub assists: i32,
    pub attended: bool,
}

/// Player profile with season totals and per-match records
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetailDto {
    pub player_name: String,
    pub attendance: i32,
    pub goals: i32,
    pub assists: i32,
    pub phone_number: Option<String>,
    pub match_records: Vec<PlayerMatchRecordDto>,
}

/// Roster entry for the admin player list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerListItemDto {
    pub id: i32,
    pub name: String,
    pub phone_number: Option<String>,
}

/// Request body for changing a player's phone number; blank clears it
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerPhoneDto {
    #[serde(default)]
    pub phone_number: Option<String>,
}
