use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryOrder,
};

use crate::server::model::upcoming::UpcomingMatchFields;

pub struct UpcomingMatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UpcomingMatchRepository<'a, C> {
    /// Creates a new instance of [`UpcomingMatchRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        fields: UpcomingMatchFields,
    ) -> Result<entity::upcoming_match::Model, DbErr> {
        let upcoming = entity::upcoming_match::ActiveModel {
            match_date: ActiveValue::Set(fields.match_date),
            match_time: ActiveValue::Set(fields.match_time),
            opponent: ActiveValue::Set(fields.opponent),
            venue: ActiveValue::Set(fields.venue),
            memo: ActiveValue::Set(fields.memo),
            ..Default::default()
        };

        upcoming.insert(self.db).await
    }

    /// Scheduled matches, soonest first
    pub async fn get_all_by_date_asc(&self) -> Result<Vec<entity::upcoming_match::Model>, DbErr> {
        entity::prelude::UpcomingMatch::find()
            .order_by_asc(entity::upcoming_match::Column::MatchDate)
            .order_by_asc(entity::upcoming_match::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrites every field of the scheduled match
    ///
    /// Returns `Ok(None)` if the scheduled match does not exist.
    pub async fn update(
        &self,
        upcoming_match_id: i32,
        fields: UpcomingMatchFields,
    ) -> Result<Option<entity::upcoming_match::Model>, DbErr> {
        let upcoming = match entity::prelude::UpcomingMatch::find_by_id(upcoming_match_id)
            .one(self.db)
            .await?
        {
            Some(upcoming) => upcoming,
            None => return Ok(None),
        };

        let mut upcoming_am = upcoming.into_active_model();
        upcoming_am.match_date = ActiveValue::Set(fields.match_date);
        upcoming_am.match_time = ActiveValue::Set(fields.match_time);
        upcoming_am.opponent = ActiveValue::Set(fields.opponent);
        upcoming_am.venue = ActiveValue::Set(fields.venue);
        upcoming_am.memo = ActiveValue::Set(fields.memo);

        let upcoming = upcoming_am.update(self.db).await?;

        Ok(Some(upcoming))
    }

    /// Deletes a scheduled match
    ///
    /// Returns OK regardless of the row existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, upcoming_match_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::UpcomingMatch::delete_by_id(upcoming_match_id)
            .exec(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::UpcomingMatch::find().count(self.db).await
    }
}
