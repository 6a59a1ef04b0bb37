//! Error types for the Navi server application.
//!
//! This module provides the error handling system with specialized error types for each domain
//! (configuration, matches, players, upcoming matches, CSV seeding). Errors that can reach a
//! client implement `IntoResponse` for Axum HTTP responses; all use `thiserror` for
//! `Display` and `Error` implementations.

pub mod config;
pub mod game;
pub mod player;
pub mod seed;
pub mod upcoming;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{game::MatchError, player::PlayerError, upcoming::UpcomingMatchError},
};

/// Main error type for the Navi server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// Configuration and CSV source errors are handled where they occur (startup exits, the
/// seeder reports "nothing to seed") and are not part of this enum.
///
/// # Error Categories
/// - Match errors (missing match date, unknown match id)
/// - Player errors (unknown player id or name)
/// - Upcoming match errors (missing date or opponent, unknown id)
/// - External library errors (database, filesystem)
#[derive(Error, Debug)]
pub enum Error {
    /// Match ledger error (validation, unknown match).
    #[error(transparent)]
    MatchError(#[from] MatchError),
    /// Player lookup error.
    #[error(transparent)]
    PlayerError(#[from] PlayerError),
    /// Scheduled match error (validation, unknown scheduled match).
    #[error(transparent)]
    UpcomingMatchError(#[from] UpcomingMatchError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error (binding the listener, reading files).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Maps domain-specific errors to appropriate HTTP status codes and JSON error responses.
/// Errors without a client-facing meaning are treated as internal server errors (500) with
/// logging.
///
/// # Returns
/// - 400 Bad Request - For requests missing a required field
/// - 404 Not Found - For unknown matches, players or scheduled matches
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::MatchError(err) => err.into_response(),
            Self::PlayerError(err) => err.into_response(),
            Self::UpcomingMatchError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds the `{ "error": ... }` body shared by every client error response.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error message to the
/// client to avoid exposing internal implementation details.
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
