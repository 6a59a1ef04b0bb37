//! One-shot bulk load of the ledger.
//!
//! The club's spreadsheet exports are parsed into a [`SeedDataset`](dataset::SeedDataset) and
//! written in a single transaction, only while the ledger has no season tally yet. At startup
//! a built-in dataset is written instead when the exports can't be read.

pub mod dataset;
pub mod fallback;
pub mod parse;
pub mod source;
pub mod writer;

#[cfg(test)]
mod tests;

use std::path::Path;

use sea_orm::DatabaseConnection;

use crate::{
    model::admin::SeedResultDto,
    server::{
        data::season_stats::SeasonStatsRepository,
        error::Error,
        service::seed::{dataset::SeedDataset, fallback::fallback_dataset, writer::write_dataset},
    },
};

/// Outcome of a seed attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Data was written
    Seeded,
    /// The ledger already has a season tally, nothing was written
    AlreadySeeded,
    /// An export is missing or unreadable, nothing was written
    NothingToSeed,
}

impl From<SeedOutcome> for SeedResultDto {
    fn from(outcome: SeedOutcome) -> Self {
        match outcome {
            SeedOutcome::Seeded => SeedResultDto {
                done: true,
                message: "CSV 데이터를 DB에 넣었습니다.".to_string(),
            },
            SeedOutcome::AlreadySeeded | SeedOutcome::NothingToSeed => SeedResultDto {
                done: false,
                message: "이미 데이터가 있거나 CSV 리소스가 없습니다.".to_string(),
            },
        }
    }
}

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    /// Creates a new instance of [`SeedService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the CSV exports from `seed_dir` if the ledger is empty.
    ///
    /// The ledger counts as empty while it has no season tally row. All four exports are read
    /// before anything is written, so an unreadable export leaves the ledger untouched.
    ///
    /// # Returns
    /// - `Ok(SeedOutcome::Seeded)` - Exports were written
    /// - `Ok(SeedOutcome::AlreadySeeded)` - Ledger already holds data
    /// - `Ok(SeedOutcome::NothingToSeed)` - An export is missing or unreadable
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was written
    pub async fn seed_if_empty(&self, seed_dir: &Path) -> Result<SeedOutcome, Error> {
        if self.has_data().await? {
            tracing::info!("Ledger already holds data, skipping CSV seed");

            return Ok(SeedOutcome::AlreadySeeded);
        }

        let dataset = match SeedDataset::load(seed_dir) {
            Ok(dataset) => dataset,
            Err(err) => {
                tracing::warn!("Nothing to seed: {}", err);

                return Ok(SeedOutcome::NothingToSeed);
            }
        };

        let summary = write_dataset(self.db, &dataset).await?;

        tracing::info!(
            players = %summary.players,
            matches = %summary.matches,
            scheduled = %summary.scheduled,
            "Seeded ledger from CSV exports in {}",
            seed_dir.display()
        );

        Ok(SeedOutcome::Seeded)
    }

    /// Startup seeding: CSV exports first, the built-in dataset when they can't be read.
    ///
    /// # Returns
    /// - `Ok(SeedOutcome::Seeded)` - CSV exports or the built-in dataset were written
    /// - `Ok(SeedOutcome::AlreadySeeded)` - Ledger already holds data
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn bootstrap(&self, seed_dir: &Path) -> Result<SeedOutcome, Error> {
        match self.seed_if_empty(seed_dir).await? {
            SeedOutcome::NothingToSeed => {
                let summary = write_dataset(self.db, &fallback_dataset()).await?;

                tracing::info!(
                    players = %summary.players,
                    matches = %summary.matches,
                    "Seeded ledger from built-in dataset"
                );

                Ok(SeedOutcome::Seeded)
            }
            outcome => Ok(outcome),
        }
    }

    async fn has_data(&self) -> Result<bool, Error> {
        Ok(SeasonStatsRepository::new(self.db).count().await? > 0)
    }
}
