use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum UpcomingMatchError {
    #[error("Match date is required")]
    MissingMatchDate,
    #[error("Opponent is required")]
    MissingOpponent,
    #[error("Upcoming match {0} not found")]
    UpcomingMatchNotFound(i32),
}

impl IntoResponse for UpcomingMatchError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingMatchDate | Self::MissingOpponent => {
                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::UpcomingMatchNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Upcoming match not found")
            }
        }
    }
}
