//! Server application core modules.
//!
//! This module contains all server-side functionality for Navi: HTTP routing, the match ledger
//! repositories, the aggregation, mutation and CSV ingestion services, configuration and startup.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
