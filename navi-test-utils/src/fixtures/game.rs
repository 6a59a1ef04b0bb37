use chrono::NaiveDate;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{AttendanceModel, GoalAssistModel, MatchModel},
    TestContext,
};

impl TestContext {
    pub fn game<'a>(&'a mut self) -> GameFixtures<'a> {
        GameFixtures { setup: self }
    }
}

pub struct GameFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> GameFixtures<'a> {
    /// Insert a match row directly, bypassing the season tally.
    ///
    /// The stored result label is derived from the scores the same way the application does.
    pub async fn insert_match(
        &self,
        match_date: NaiveDate,
        opponent: &str,
        our_score: i32,
        opponent_score: i32,
    ) -> Result<MatchModel, TestError> {
        let result = if our_score > opponent_score {
            "승"
        } else if our_score < opponent_score {
            "패"
        } else {
            "무"
        };

        Ok(entity::prelude::Game::insert(entity::game::ActiveModel {
            match_date: ActiveValue::Set(match_date),
            match_time: ActiveValue::Set(None),
            opponent: ActiveValue::Set(opponent.to_string()),
            our_score: ActiveValue::Set(our_score),
            opponent_score: ActiveValue::Set(opponent_score),
            result: ActiveValue::Set(result.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_attendance(
        &self,
        match_id: i32,
        player_id: i32,
        attended: bool,
    ) -> Result<AttendanceModel, TestError> {
        Ok(
            entity::prelude::MatchAttendance::insert(entity::match_attendance::ActiveModel {
                match_id: ActiveValue::Set(match_id),
                player_id: ActiveValue::Set(player_id),
                attended: ActiveValue::Set(attended),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_goal_assist(
        &self,
        match_id: i32,
        player_id: i32,
        goals: i32,
        assists: i32,
    ) -> Result<GoalAssistModel, TestError> {
        Ok(
            entity::prelude::MatchGoalAssist::insert(entity::match_goal_assist::ActiveModel {
                match_id: ActiveValue::Set(match_id),
                player_id: ActiveValue::Set(player_id),
                goals: ActiveValue::Set(goals),
                assists: ActiveValue::Set(assists),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
