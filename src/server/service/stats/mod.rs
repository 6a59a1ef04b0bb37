//! Read-side aggregation over the match ledger.
//!
//! Rankings and logs are recomputed from a full scan of the stored rows on every call. The
//! season tally is the only running total and is read as stored.

pub mod ranking;

#[cfg(test)]
mod tests;

use std::collections::{BTreeSet, HashMap};

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        log::{AttendanceLogDto, GoalAssistLogDto},
        player::{PlayerDetailDto, PlayerMatchRecordDto},
        season::{HomeDto, RankingDto, SeasonStatsDto},
    },
    server::{
        data::{
            attendance::AttendanceRepository, game::MatchRepository,
            goal_assist::GoalAssistRepository, player::PlayerRepository,
            season_stats::SeasonStatsRepository, upcoming_match::UpcomingMatchRepository,
        },
        error::Error,
        model::season::SeasonTally,
        service::stats::ranking::{rank_players, RankingMetric, UNKNOWN_PLAYER_NAME},
        util::time::current_season_year,
    },
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    /// Creates a new instance of [`StatsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Tally of the most recent season.
    ///
    /// # Returns
    /// - `Ok(SeasonStatsDto)` - Row with the highest season year, or an all-zero tally for the
    ///   current calendar year when no season has been recorded
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn season_summary(&self) -> Result<SeasonStatsDto, Error> {
        let season_repo = SeasonStatsRepository::new(self.db);

        let summary = match season_repo.get_latest().await? {
            Some(season) => SeasonTally::from(&season).into_dto(season.season_year),
            None => SeasonTally::default().into_dto(current_season_year(Utc::now())),
        };

        Ok(summary)
    }

    /// Ranks players by the summed metric.
    ///
    /// Goals and assists are summed over every goal/assist record; attendance counts attended
    /// rows. See [`rank_players`] for tie and omission rules.
    pub async fn ranking(&self, metric: RankingMetric) -> Result<Vec<RankingDto>, Error> {
        let names = PlayerRepository::new(self.db).get_names().await?;

        let contributions: Vec<(i32, i32)> = match metric {
            RankingMetric::Goals | RankingMetric::Assists => GoalAssistRepository::new(self.db)
                .get_all()
                .await?
                .into_iter()
                .map(|record| {
                    let value = match metric {
                        RankingMetric::Goals => record.goals,
                        _ => record.assists,
                    };
                    (record.player_id, value)
                })
                .collect(),
            RankingMetric::Attendance => AttendanceRepository::new(self.db)
                .get_all_attended()
                .await?
                .into_iter()
                .map(|row| (row.player_id, 1))
                .collect(),
        };

        Ok(rank_players(contributions, &names))
    }

    /// Home screen bundle
    pub async fn home(&self) -> Result<HomeDto, Error> {
        let season_stats = self.season_summary().await?;
        let next_matches = UpcomingMatchRepository::new(self.db)
            .get_all_by_date_asc()
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(HomeDto {
            season_stats,
            next_matches,
            goal_ranking: self.ranking(RankingMetric::Goals).await?,
            assist_ranking: self.ranking(RankingMetric::Assists).await?,
            attendance_ranking: self.ranking(RankingMetric::Attendance).await?,
        })
    }

    /// Profile of a player looked up by exact name.
    ///
    /// # Arguments
    /// - `name` - Player name, surrounding whitespace is ignored
    ///
    /// # Returns
    /// - `Ok(Some(PlayerDetailDto))` - Totals over every record plus one line per attended
    ///   match, most recent first
    /// - `Ok(None)` - No player has that name
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn player_detail(&self, name: &str) -> Result<Option<PlayerDetailDto>, Error> {
        let player = match PlayerRepository::new(self.db)
            .find_by_name(name.trim())
            .await?
        {
            Some(player) => player,
            None => return Ok(None),
        };

        let records = GoalAssistRepository::new(self.db)
            .get_by_player(player.id)
            .await?;
        let attended_match_ids: Vec<i32> = AttendanceRepository::new(self.db)
            .get_attended_by_player(player.id)
            .await?
            .into_iter()
            .map(|row| row.match_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut per_match: HashMap<i32, (i32, i32)> = HashMap::new();
        for record in &records {
            let entry = per_match.entry(record.match_id).or_default();
            entry.0 += record.goals;
            entry.1 += record.assists;
        }

        let match_records: Vec<PlayerMatchRecordDto> = MatchRepository::new(self.db)
            .get_many_by_date_desc(&attended_match_ids)
            .await?
            .into_iter()
            .map(|game| {
                let (goals, assists) = per_match.get(&game.id).copied().unwrap_or_default();

                PlayerMatchRecordDto {
                    match_id: game.id,
                    match_date: game.match_date,
                    opponent: game.opponent,
                    goals,
                    assists,
                    attended: true,
                }
            })
            .collect();

        Ok(Some(PlayerDetailDto {
            player_name: player.name,
            attendance: match_records.len() as i32,
            goals: records.iter().map(|record| record.goals).sum(),
            assists: records.iter().map(|record| record.assists).sum(),
            phone_number: player.phone_number,
            match_records,
        }))
    }

    /// Every goal/assist contribution, grouped by match.
    ///
    /// Matches are listed most recent first; within a match, most goals then most assists
    /// first. Records with neither goals nor assists are left out.
    pub async fn goal_assist_log(&self) -> Result<Vec<GoalAssistLogDto>, Error> {
        let names = PlayerRepository::new(self.db).get_names().await?;
        let matches = MatchRepository::new(self.db).get_all_by_date_desc().await?;

        let mut records_by_match: HashMap<i32, Vec<entity::match_goal_assist::Model>> =
            HashMap::new();
        for record in GoalAssistRepository::new(self.db).get_all().await? {
            if record.goals > 0 || record.assists > 0 {
                records_by_match
                    .entry(record.match_id)
                    .or_default()
                    .push(record);
            }
        }

        let mut log = Vec::new();
        for game in matches {
            let Some(mut records) = records_by_match.remove(&game.id) else {
                continue;
            };
            records.sort_by(|a, b| b.goals.cmp(&a.goals).then(b.assists.cmp(&a.assists)));

            for record in records {
                log.push(GoalAssistLogDto {
                    match_id: game.id,
                    match_date: game.match_date,
                    opponent: game.opponent.clone(),
                    player_name: player_name(&names, record.player_id),
                    goals: record.goals,
                    assists: record.assists,
                });
            }
        }

        Ok(log)
    }

    /// Roster of every match, most recent first, names sorted
    pub async fn attendance_log(&self) -> Result<Vec<AttendanceLogDto>, Error> {
        let names = PlayerRepository::new(self.db).get_names().await?;
        let matches = MatchRepository::new(self.db).get_all_by_date_desc().await?;

        let mut rosters: HashMap<i32, Vec<String>> = HashMap::new();
        for row in AttendanceRepository::new(self.db).get_all_attended().await? {
            rosters
                .entry(row.match_id)
                .or_default()
                .push(player_name(&names, row.player_id));
        }

        Ok(matches
            .into_iter()
            .map(|game| {
                let mut attended_player_names = rosters.remove(&game.id).unwrap_or_default();
                attended_player_names.sort();

                AttendanceLogDto {
                    match_id: game.id,
                    match_date: game.match_date,
                    opponent: game.opponent,
                    attended_player_names,
                }
            })
            .collect())
    }
}

fn player_name(names: &HashMap<i32, String>, player_id: i32) -> String {
    names
        .get(&player_id)
        .cloned()
        .unwrap_or_else(|| UNKNOWN_PLAYER_NAME.to_string())
}
