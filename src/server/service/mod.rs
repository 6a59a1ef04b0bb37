//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer that implements the ledger's business rules and
//! coordinates between repositories. Services include read-side aggregation (season summary,
//! rankings, logs, player profiles), the match mutation coordinator, roster and schedule
//! management, and the one-shot CSV seeder.

pub mod game;
pub mod player;
pub mod seed;
pub mod stats;
pub mod upcoming;
