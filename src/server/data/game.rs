use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::game::MatchFields;

pub struct MatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchRepository<'a, C> {
    /// Creates a new instance of [`MatchRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a match, storing the result label derived from the scores
    pub async fn create(&self, fields: &MatchFields) -> Result<entity::game::Model, DbErr> {
        let game = entity::game::ActiveModel {
            match_date: ActiveValue::Set(fields.match_date),
            match_time: ActiveValue::Set(fields.match_time),
            opponent: ActiveValue::Set(fields.opponent.clone()),
            our_score: ActiveValue::Set(fields.our_score),
            opponent_score: ActiveValue::Set(fields.opponent_score),
            result: ActiveValue::Set(fields.result().label().to_string()),
            ..Default::default()
        };

        game.insert(self.db).await
    }

    pub async fn find_by_id(&self, match_id: i32) -> Result<Option<entity::game::Model>, DbErr> {
        entity::prelude::Game::find_by_id(match_id).one(self.db).await
    }

    /// All matches, most recent first; matches on the same date are ordered newest ID first
    pub async fn get_all_by_date_desc(&self) -> Result<Vec<entity::game::Model>, DbErr> {
        entity::prelude::Game::find()
            .order_by_desc(entity::game::Column::MatchDate)
            .order_by_desc(entity::game::Column::Id)
            .all(self.db)
            .await
    }

    /// The given matches, most recent first
    pub async fn get_many_by_date_desc(
        &self,
        match_ids: &[i32],
    ) -> Result<Vec<entity::game::Model>, DbErr> {
        if match_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Game::find()
            .filter(entity::game::Column::Id.is_in(match_ids.iter().copied()))
            .order_by_desc(entity::game::Column::MatchDate)
            .order_by_desc(entity::game::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrites every field of the match and recomputes its result label
    ///
    /// Returns `Ok(None)` if the match does not exist.
    pub async fn update(
        &self,
        match_id: i32,
        fields: &MatchFields,
    ) -> Result<Option<entity::game::Model>, DbErr> {
        let game = match self.find_by_id(match_id).await? {
            Some(game) => game,
            None => return Ok(None),
        };

        let mut game_am = game.into_active_model();
        game_am.match_date = ActiveValue::Set(fields.match_date);
        game_am.match_time = ActiveValue::Set(fields.match_time);
        game_am.opponent = ActiveValue::Set(fields.opponent.clone());
        game_am.our_score = ActiveValue::Set(fields.our_score);
        game_am.opponent_score = ActiveValue::Set(fields.opponent_score);
        game_am.result = ActiveValue::Set(fields.result().label().to_string());

        let game = game_am.update(self.db).await?;

        Ok(Some(game))
    }

    /// Deletes a match
    ///
    /// Attendance and goal/assist rows are not removed, callers delete them first.
    pub async fn delete(&self, match_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Game::delete_by_id(match_id)
            .exec(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Game::find().count(self.db).await
    }
}
