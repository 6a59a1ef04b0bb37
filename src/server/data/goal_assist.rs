use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder,
};

/// A player's goal/assist figures for one match, ready to be stored
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoalAssistEntry {
    pub player_id: i32,
    pub goals: i32,
    pub assists: i32,
}

pub struct GoalAssistRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GoalAssistRepository<'a, C> {
    /// Creates a new instance of [`GoalAssistRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create_many(
        &self,
        match_id: i32,
        entries: &[GoalAssistEntry],
    ) -> Result<(), DbErr> {
        if entries.is_empty() {
            return Ok(());
        }

        let rows = entries
            .iter()
            .map(|entry| entity::match_goal_assist::ActiveModel {
                match_id: ActiveValue::Set(match_id),
                player_id: ActiveValue::Set(entry.player_id),
                goals: ActiveValue::Set(entry.goals),
                assists: ActiveValue::Set(entry.assists),
                ..Default::default()
            });

        entity::prelude::MatchGoalAssist::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Records of one match, most goals first then most assists
    pub async fn get_by_match(
        &self,
        match_id: i32,
    ) -> Result<Vec<entity::match_goal_assist::Model>, DbErr> {
        entity::prelude::MatchGoalAssist::find()
            .filter(entity::match_goal_assist::Column::MatchId.eq(match_id))
            .order_by_desc(entity::match_goal_assist::Column::Goals)
            .order_by_desc(entity::match_goal_assist::Column::Assists)
            .order_by_asc(entity::match_goal_assist::Column::Id)
            .all(self.db)
            .await
    }

    /// Every record in insertion order
    pub async fn get_all(&self) -> Result<Vec<entity::match_goal_assist::Model>, DbErr> {
        entity::prelude::MatchGoalAssist::find()
            .order_by_asc(entity::match_goal_assist::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_player(
        &self,
        player_id: i32,
    ) -> Result<Vec<entity::match_goal_assist::Model>, DbErr> {
        entity::prelude::MatchGoalAssist::find()
            .filter(entity::match_goal_assist::Column::PlayerId.eq(player_id))
            .order_by_asc(entity::match_goal_assist::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete_by_match(&self, match_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::MatchGoalAssist::delete_many()
            .filter(entity::match_goal_assist::Column::MatchId.eq(match_id))
            .exec(self.db)
            .await
    }
}
