//! Match mutation coordinator.
//!
//! Creating, editing and deleting a match touches the match row, its attendance rows, its
//! goal/assist rows and the season tally. Each mutation runs inside a single transaction so
//! the tally and the match rows always describe the same set of matches.

pub mod tally;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use chrono::Datelike;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::game::{CreateMatchDto, GoalAssistRecordItemDto, MatchDetailDto, MatchDto, MatchResult},
    server::{
        data::{
            attendance::AttendanceRepository,
            game::MatchRepository,
            goal_assist::{GoalAssistEntry, GoalAssistRepository},
            player::PlayerRepository,
        },
        error::{game::MatchError, Error},
        model::{db::MatchModel, game::MatchFields},
        service::game::tally::{record_result, revert_result},
    },
};

pub struct MatchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MatchService<'a> {
    /// Creates a new instance of [`MatchService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All matches, most recent first
    pub async fn list_matches(&self) -> Result<Vec<MatchDto>, Error> {
        let matches = MatchRepository::new(self.db).get_all_by_date_desc().await?;

        Ok(matches.into_iter().map(MatchDto::from).collect())
    }

    /// Match with its roster and goal/assist records.
    ///
    /// # Returns
    /// - `Ok(Some(MatchDetailDto))` - Match found
    /// - `Ok(None)` - No match with that ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn match_detail(&self, match_id: i32) -> Result<Option<MatchDetailDto>, Error> {
        let game = match MatchRepository::new(self.db).find_by_id(match_id).await? {
            Some(game) => game,
            None => return Ok(None),
        };

        let attendee_player_ids = AttendanceRepository::new(self.db)
            .get_attended_by_match(match_id)
            .await?
            .into_iter()
            .map(|row| row.player_id)
            .collect();
        let goal_assist_records = GoalAssistRepository::new(self.db)
            .get_by_match(match_id)
            .await?
            .into_iter()
            .map(|record| GoalAssistRecordItemDto {
                player_id: Some(record.player_id),
                goals: record.goals,
                assists: record.assists,
            })
            .collect();

        let game = MatchDto::from(game);

        Ok(Some(MatchDetailDto {
            id: game.id,
            match_date: game.match_date,
            match_time: game.match_time,
            opponent: game.opponent,
            our_score: game.our_score,
            opponent_score: game.opponent_score,
            result: game.result,
            attendee_player_ids,
            goal_assist_records,
        }))
    }

    /// Records a played match.
    ///
    /// Stores the match with its result derived from the score, marks every attendee that
    /// resolves to a player as attended, stores the non-empty goal/assist lines of resolving
    /// players, then counts the match in its season's tally.
    ///
    /// # Returns
    /// - `Ok(MatchDto)` - The stored match
    /// - `Err(Error::MatchError(MatchError::MissingMatchDate))` - Request had no date, nothing
    ///   was written
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was written
    pub async fn create_match(&self, request: CreateMatchDto) -> Result<MatchDto, Error> {
        let fields = MatchFields::from_request(&request)?;

        let txn = self.db.begin().await?;

        let game = MatchRepository::new(&txn).create(&fields).await?;
        write_roster(&txn, game.id, &request).await?;
        record_result(&txn, fields.season_year(), fields.result()).await?;

        txn.commit().await?;

        tracing::info!(
            match_id = %game.id,
            match_date = %game.match_date,
            "Recorded {} match against {:?}",
            game.result,
            game.opponent
        );

        Ok(game.into())
    }

    /// Replaces every field, the roster and the goal/assist records of a match.
    ///
    /// The old result is removed from the season of the old date before the new result is
    /// counted in the season of the new date, so moving a match across years is handled.
    /// Rosters and records are deleted and recreated rather than diffed.
    ///
    /// # Returns
    /// - `Ok(MatchDto)` - The updated match
    /// - `Err(Error::MatchError(MatchError::MissingMatchDate))` - Request had no date
    /// - `Err(Error::MatchError(MatchError::MatchNotFound))` - No match with that ID
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was written
    pub async fn update_match(
        &self,
        match_id: i32,
        request: CreateMatchDto,
    ) -> Result<MatchDto, Error> {
        let fields = MatchFields::from_request(&request)?;

        let txn = self.db.begin().await?;
        let match_repo = MatchRepository::new(&txn);

        let Some(previous) = match_repo.find_by_id(match_id).await? else {
            return Err(MatchError::MatchNotFound(match_id).into());
        };

        revert_result(&txn, previous.match_date.year(), stored_result(&previous)).await?;

        let game = match_repo
            .update(match_id, &fields)
            .await?
            .ok_or(MatchError::MatchNotFound(match_id))?;

        AttendanceRepository::new(&txn)
            .delete_by_match(match_id)
            .await?;
        GoalAssistRepository::new(&txn)
            .delete_by_match(match_id)
            .await?;
        write_roster(&txn, match_id, &request).await?;

        record_result(&txn, fields.season_year(), fields.result()).await?;

        txn.commit().await?;

        tracing::info!(match_id = %match_id, "Updated match");

        Ok(game.into())
    }

    /// Deletes a match with its roster and records and removes it from its season's tally.
    ///
    /// # Returns
    /// - `Ok(())` - Match deleted
    /// - `Err(Error::MatchError(MatchError::MatchNotFound))` - No match with that ID
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was deleted
    pub async fn delete_match(&self, match_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let match_repo = MatchRepository::new(&txn);

        let Some(game) = match_repo.find_by_id(match_id).await? else {
            return Err(MatchError::MatchNotFound(match_id).into());
        };

        AttendanceRepository::new(&txn)
            .delete_by_match(match_id)
            .await?;
        GoalAssistRepository::new(&txn)
            .delete_by_match(match_id)
            .await?;
        match_repo.delete(match_id).await?;

        revert_result(&txn, game.match_date.year(), stored_result(&game)).await?;

        txn.commit().await?;

        tracing::info!(match_id = %match_id, "Deleted match");

        Ok(())
    }
}

/// Result a stored match was counted with
fn stored_result(game: &MatchModel) -> MatchResult {
    MatchResult::from_label(&game.result)
        .unwrap_or_else(|| MatchResult::from_scores(game.our_score, game.opponent_score))
}

/// Writes attendance and goal/assist rows for a match from a create/update request.
///
/// IDs that don't resolve to a player are skipped. Repeated attendee IDs collapse into one
/// row and repeated record lines for one player are summed. Negative counts are treated as
/// zero and lines with neither goals nor assists are dropped.
async fn write_roster<C: ConnectionTrait>(
    db: &C,
    match_id: i32,
    request: &CreateMatchDto,
) -> Result<(), DbErr> {
    let requested_ids: Vec<i32> = request
        .attendee_player_ids
        .iter()
        .copied()
        .chain(
            request
                .goal_assist_records
                .iter()
                .filter_map(|record| record.player_id),
        )
        .collect();
    let existing = PlayerRepository::new(db)
        .get_existing_ids(&requested_ids)
        .await?;

    let mut seen = HashSet::new();
    let attendee_ids: Vec<i32> = request
        .attendee_player_ids
        .iter()
        .copied()
        .filter(|player_id| existing.contains(player_id) && seen.insert(*player_id))
        .collect();

    let mut entries: Vec<GoalAssistEntry> = Vec::new();
    for record in &request.goal_assist_records {
        let Some(player_id) = record.player_id.filter(|id| existing.contains(id)) else {
            continue;
        };
        let goals = record.goals.max(0);
        let assists = record.assists.max(0);
        if goals == 0 && assists == 0 {
            continue;
        }

        match entries.iter_mut().find(|entry| entry.player_id == player_id) {
            Some(entry) => {
                entry.goals += goals;
                entry.assists += assists;
            }
            None => entries.push(GoalAssistEntry {
                player_id,
                goals,
                assists,
            }),
        }
    }

    AttendanceRepository::new(db)
        .create_many(match_id, &attendee_ids)
        .await?;
    GoalAssistRepository::new(db)
        .create_many(match_id, &entries)
        .await?;

    Ok(())
}
