//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, one per ledger table.
//! Every repository is generic over [`sea_orm::ConnectionTrait`] so the same queries run on a
//! pooled connection for reads and on a transaction for multi-record mutations.

pub mod attendance;
pub mod game;
pub mod goal_assist;
pub mod player;
pub mod season_stats;
pub mod upcoming_match;

#[cfg(test)]
mod tests;
