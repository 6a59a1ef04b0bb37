use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A scheduled match shown in the home screen's "next match" section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingMatchDto {
    pub id: i32,
    pub match_date: NaiveDate,
    pub match_time: Option<NaiveTime>,
    pub opponent: String,
    pub venue: Option<String>,
    pub memo: Option<String>,
}

/// Request body for creating or updating a scheduled match
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUpcomingMatchDto {
    pub match_date: Option<NaiveDate>,
    #[serde(default)]
    pub match_time: Option<NaiveTime>,
    #[serde(default)]
    pub opponent: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub memo: Option<String>,
}
