use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Match date is required")]
    MissingMatchDate,
    #[error("Match {0} not found")]
    MatchNotFound(i32),
}

impl IntoResponse for MatchError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingMatchDate => {
                tracing::debug!("{}", self);

                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::MatchNotFound(match_id) => {
                tracing::debug!(match_id = %match_id, "{}", self);

                error_response(StatusCode::NOT_FOUND, "Match not found")
            }
        }
    }
}
