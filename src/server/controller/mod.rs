//! HTTP controller endpoints for the Navi web API.
//!
//! This module contains Axum handlers for the season ledger: the home bundle, match records,
//! goal/assist and attendance logs, player profiles, the match schedule and the admin seed
//! operation. Controllers extract request data, call the matching service and turn the result
//! into an HTTP response; every handler is annotated with utoipa for OpenAPI documentation.

pub mod admin;
pub mod game;
pub mod home;
pub mod log;
pub mod player;
pub mod upcoming;
