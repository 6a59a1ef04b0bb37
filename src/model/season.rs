use serde::{Deserialize, Serialize};

use crate::model::upcoming::UpcomingMatchDto;

/// Win/draw/loss tally for one season
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStatsDto {
    pub season_year: i32,
    pub total_matches: i32,
    pub wins: i32,
    pub draws: i32,
    pub losses: i32,
}

/// One line of a player ranking
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankingDto {
    pub rank: i32,
    pub player_name: String,
    pub value: i32,
}

/// Home screen bundle: season tally, upcoming matches and the three rankings
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeDto {
    pub season_stats: SeasonStatsDto,
    pub next_matches: Vec<UpcomingMatchDto>,
    pub goal_ranking: Vec<RankingDto>,
    pub assist_ranking: Vec<RankingDto>,
    pub attendance_ranking: Vec<RankingDto>,
}
