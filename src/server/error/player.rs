use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum PlayerError {
    #[error("Player {0} not found")]
    PlayerNotFound(i32),
    #[error("Player named {0:?} not found")]
    PlayerNameNotFound(String),
}

impl IntoResponse for PlayerError {
    fn into_response(self) -> Response {
        match &self {
            Self::PlayerNotFound(player_id) => {
                tracing::debug!(player_id = %player_id, "{}", self);
            }
            Self::PlayerNameNotFound(name) => {
                tracing::debug!(player_name = %name, "{}", self);
            }
        }

        error_response(StatusCode::NOT_FOUND, "Player not found")
    }
}
