//! Writes a [`SeedDataset`] into an empty ledger.

use std::collections::{HashMap, HashSet};

use chrono::NaiveTime;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{
        attendance::AttendanceRepository,
        game::MatchRepository,
        goal_assist::{GoalAssistEntry, GoalAssistRepository},
        player::PlayerRepository,
        season_stats::SeasonStatsRepository,
        upcoming_match::UpcomingMatchRepository,
    },
    model::upcoming::UpcomingMatchFields,
    service::seed::dataset::{MatchSeed, SeedDataset},
};

/// Kick-off time given to a match scheduled from a bare date
const PLACEHOLDER_KICK_OFF: (u32, u32) = (14, 0);
const PLACEHOLDER_OPPONENT: &str = "다음 상대팀";
const PLACEHOLDER_VENUE: &str = "홈 경기장";

/// Counts of rows written by [`write_dataset`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub players: usize,
    pub matches: usize,
    pub scheduled: bool,
}

/// Writes the whole dataset in one transaction.
///
/// Players are created first so that matches can reference them by name; names that don't
/// resolve are skipped. Seeded matches don't adjust the season tally, which comes from the
/// dataset's season totals. The next match is only scheduled when none is scheduled yet.
pub async fn write_dataset(
    db: &DatabaseConnection,
    dataset: &SeedDataset,
) -> Result<SeedSummary, DbErr> {
    let txn = db.begin().await?;
    let player_repo = PlayerRepository::new(&txn);

    for name in &dataset.roster {
        player_repo.get_or_create(name).await?;
    }

    SeasonStatsRepository::new(&txn)
        .save(dataset.season.season_year, dataset.season.tally)
        .await?;

    let player_ids: HashMap<String, i32> = player_repo
        .get_names()
        .await?
        .into_iter()
        .map(|(player_id, name)| (name, player_id))
        .collect();

    let match_repo = MatchRepository::new(&txn);
    let attendance_repo = AttendanceRepository::new(&txn);
    let goal_assist_repo = GoalAssistRepository::new(&txn);
    for seed in &dataset.matches {
        let game = match_repo.create(&seed.fields).await?;

        attendance_repo
            .create_many(game.id, &resolve_attendees(seed, &player_ids))
            .await?;
        goal_assist_repo
            .create_many(game.id, &resolve_goal_assists(seed, &player_ids))
            .await?;
    }

    let upcoming_repo = UpcomingMatchRepository::new(&txn);
    let mut scheduled = false;
    if let Some(match_date) = dataset.upcoming_date {
        if upcoming_repo.count().await? == 0 {
            upcoming_repo
                .create(UpcomingMatchFields {
                    match_date,
                    match_time: NaiveTime::from_hms_opt(
                        PLACEHOLDER_KICK_OFF.0,
                        PLACEHOLDER_KICK_OFF.1,
                        0,
                    ),
                    opponent: PLACEHOLDER_OPPONENT.to_string(),
                    venue: Some(PLACEHOLDER_VENUE.to_string()),
                    memo: None,
                })
                .await?;
            scheduled = true;
        }
    }

    txn.commit().await?;

    Ok(SeedSummary {
        players: dataset.roster.len(),
        matches: dataset.matches.len(),
        scheduled,
    })
}

/// Player IDs of the attendees, each once, unknown names skipped
fn resolve_attendees(seed: &MatchSeed, player_ids: &HashMap<String, i32>) -> Vec<i32> {
    let mut seen = HashSet::new();

    seed.attendee_names
        .iter()
        .filter_map(|name| {
            let player_id = player_ids.get(name).copied();
            if player_id.is_none() {
                tracing::warn!(
                    match_date = %seed.fields.match_date,
                    "Skipping attendee {:?} not on the roster",
                    name
                );
            }
            player_id
        })
        .filter(|player_id| seen.insert(*player_id))
        .collect()
}

/// Goal/assist entries per player, summing repeated lines, unknown names skipped
fn resolve_goal_assists(
    seed: &MatchSeed,
    player_ids: &HashMap<String, i32>,
) -> Vec<GoalAssistEntry> {
    let mut entries: Vec<GoalAssistEntry> = Vec::new();

    for line in &seed.goal_assists {
        let Some(&player_id) = player_ids.get(&line.player_name) else {
            tracing::warn!(
                match_date = %seed.fields.match_date,
                "Skipping goal/assist line for {:?} not on the roster",
                line.player_name
            );
            continue;
        };

        match entries.iter_mut().find(|entry| entry.player_id == player_id) {
            Some(entry) => {
                entry.goals += line.goals;
                entry.assists += line.assists;
            }
            None => entries.push(GoalAssistEntry {
                player_id,
                goals: line.goals,
                assists: line.assists,
            }),
        }
    }

    entries
}
