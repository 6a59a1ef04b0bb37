use sea_orm::DatabaseConnection;

use crate::{
    model::upcoming::{CreateUpcomingMatchDto, UpcomingMatchDto},
    server::{
        data::upcoming_match::UpcomingMatchRepository,
        error::{upcoming::UpcomingMatchError, Error},
        model::upcoming::UpcomingMatchFields,
    },
};

pub struct UpcomingMatchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UpcomingMatchService<'a> {
    /// Creates a new instance of [`UpcomingMatchService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Scheduled matches, soonest first
    pub async fn list_upcoming(&self) -> Result<Vec<UpcomingMatchDto>, Error> {
        let upcoming = UpcomingMatchRepository::new(self.db)
            .get_all_by_date_asc()
            .await?;

        Ok(upcoming.into_iter().map(UpcomingMatchDto::from).collect())
    }

    /// Schedules a match.
    ///
    /// # Returns
    /// - `Ok(UpcomingMatchDto)` - The stored scheduled match
    /// - `Err(Error::UpcomingMatchError(_))` - Date missing or opponent blank
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_upcoming(
        &self,
        request: CreateUpcomingMatchDto,
    ) -> Result<UpcomingMatchDto, Error> {
        let fields = UpcomingMatchFields::from_request(&request)?;

        let upcoming = UpcomingMatchRepository::new(self.db).create(fields).await?;

        tracing::info!(
            upcoming_match_id = %upcoming.id,
            match_date = %upcoming.match_date,
            "Scheduled match against {:?}",
            upcoming.opponent
        );

        Ok(upcoming.into())
    }

    /// Replaces every field of a scheduled match.
    ///
    /// # Returns
    /// - `Ok(UpcomingMatchDto)` - The updated scheduled match
    /// - `Err(Error::UpcomingMatchError(_))` - Date missing, opponent blank or unknown ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_upcoming(
        &self,
        upcoming_match_id: i32,
        request: CreateUpcomingMatchDto,
    ) -> Result<UpcomingMatchDto, Error> {
        let fields = UpcomingMatchFields::from_request(&request)?;

        let upcoming = UpcomingMatchRepository::new(self.db)
            .update(upcoming_match_id, fields)
            .await?
            .ok_or(UpcomingMatchError::UpcomingMatchNotFound(upcoming_match_id))?;

        tracing::info!(upcoming_match_id = %upcoming_match_id, "Updated scheduled match");

        Ok(upcoming.into())
    }

    pub async fn delete_upcoming(&self, upcoming_match_id: i32) -> Result<(), Error> {
        let result = UpcomingMatchRepository::new(self.db)
            .delete(upcoming_match_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(UpcomingMatchError::UpcomingMatchNotFound(upcoming_match_id).into());
        }

        tracing::info!(upcoming_match_id = %upcoming_match_id, "Deleted scheduled match");

        Ok(())
    }
}
