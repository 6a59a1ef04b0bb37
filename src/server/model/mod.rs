//! Server application models and type definitions.
//!
//! This module contains the application state shared by HTTP handlers, type aliases for the
//! SeaORM entity models, and the validated field sets the services hand to repositories.

pub mod app;
pub mod db;
pub mod game;
pub mod player;
pub mod season;
pub mod upcoming;
