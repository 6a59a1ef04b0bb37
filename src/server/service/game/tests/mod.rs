
use navi_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;

fn request(
    match_date: chrono::NaiveDate,
    our_score: i32,
    opponent_score: i32,
    attendee_player_ids: Vec<i32>,
    goal_assist_records: Vec<(i32, i32, i32)>,
) -> CreateMatchDto {
    CreateMatchDto {
        match_date: Some(match_date),
        match_time: None,
        opponent: Some(" 찢자fc ".to_string()),
        our_score,
        opponent_score,
        attendee_player_ids,
        goal_assist_records: goal_assist_records
            .into_iter()
            .map(|(player_id, goals, assists)| GoalAssistRecordItemDto {
                player_id: Some(player_id),
                goals,
                assists,
            })
            .collect(),
    }
}

async fn season(
    test: &TestContext,
    season_year: i32,
) -> Result<Option<entity::season_stats::Model>, TestError> {
    Ok(
        crate::server::data::season_stats::SeasonStatsRepository::new(&test.db)
            .find_by_year(season_year)
            .await?,
    )
}

async fn attendee_ids(test: &TestContext, match_id: i32) -> Result<Vec<i32>, TestError> {
    Ok(AttendanceRepository::new(&test.db)
        .get_attended_by_match(match_id)
        .await?
        .into_iter()
        .map(|row| row.player_id)
        .collect())
}

async fn goal_assist_count(test: &TestContext) -> Result<u64, TestError> {
    Ok(entity::prelude::MatchGoalAssist::find()
        .count(&test.db)
        .await?)
}
