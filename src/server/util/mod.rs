//! Utility functions and helpers for server operations.
//!
//! This module provides small reusable helpers shared by services and the CSV seeder: free-text
//! normalization of optional request fields and calendar helpers for season years.

pub mod text;
pub mod time;
