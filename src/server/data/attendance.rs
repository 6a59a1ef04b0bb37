use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct AttendanceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AttendanceRepository<'a, C> {
    /// Creates a new instance of [`AttendanceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Marks each player as attended for the match
    ///
    /// Player IDs must be unique, the table is unique on (match, player).
    pub async fn create_many(&self, match_id: i32, player_ids: &[i32]) -> Result<(), DbErr> {
        if player_ids.is_empty() {
            return Ok(());
        }

        let rows = player_ids
            .iter()
            .map(|player_id| entity::match_attendance::ActiveModel {
                match_id: ActiveValue::Set(match_id),
                player_id: ActiveValue::Set(*player_id),
                attended: ActiveValue::Set(true),
                ..Default::default()
            });

        entity::prelude::MatchAttendance::insert_many(rows)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Attended rows of one match in insertion order
    pub async fn get_attended_by_match(
        &self,
        match_id: i32,
    ) -> Result<Vec<entity::match_attendance::Model>, DbErr> {
        entity::prelude::MatchAttendance::find()
            .filter(entity::match_attendance::Column::MatchId.eq(match_id))
            .filter(entity::match_attendance::Column::Attended.eq(true))
            .order_by_asc(entity::match_attendance::Column::Id)
            .all(self.db)
            .await
    }

    /// Every attended row in insertion order
    pub async fn get_all_attended(&self) -> Result<Vec<entity::match_attendance::Model>, DbErr> {
        entity::prelude::MatchAttendance::find()
            .filter(entity::match_attendance::Column::Attended.eq(true))
            .order_by_asc(entity::match_attendance::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_attended_by_player(
        &self,
        player_id: i32,
    ) -> Result<Vec<entity::match_attendance::Model>, DbErr> {
        entity::prelude::MatchAttendance::find()
            .filter(entity::match_attendance::Column::PlayerId.eq(player_id))
            .filter(entity::match_attendance::Column::Attended.eq(true))
            .order_by_asc(entity::match_attendance::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete_by_match(&self, match_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::MatchAttendance::delete_many()
            .filter(entity::match_attendance::Column::MatchId.eq(match_id))
            .exec(self.db)
            .await
    }
}
