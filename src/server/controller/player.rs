use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        player::{PlayerDetailDto, PlayerListItemDto, UpdatePlayerPhoneDto},
    },
    server::{
        error::{player::PlayerError, Error},
        model::app::AppState,
        service::{player::PlayerService, stats::StatsService},
    },
};

pub static PLAYER_TAG: &str = "player";

/// Get a player's totals and attended matches by exact name
#[utoipa::path(
    get,
    path = "/api/player/{name}",
    tag = PLAYER_TAG,
    params(("name" = String, Path, description = "Player name")),
    responses(
        (status = 200, description = "Player profile", body = PlayerDetailDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let detail = StatsService::new(&state.db)
        .player_detail(&name)
        .await?
        .ok_or(PlayerError::PlayerNameNotFound(name))?;

    Ok((StatusCode::OK, Json(detail)))
}

/// List every player with their phone number, sorted by name
#[utoipa::path(
    get,
    path = "/api/players",
    tag = PLAYER_TAG,
    responses(
        (status = 200, description = "Roster", body = Vec<PlayerListItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_players(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let players = PlayerService::new(&state.db).list_players().await?;

    Ok((StatusCode::OK, Json(players)))
}

/// Set or clear a player's phone number
///
/// A blank number clears the stored value.
#[utoipa::path(
    patch,
    path = "/api/player/id/{id}",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player ID")),
    request_body = UpdatePlayerPhoneDto,
    responses(
        (status = 200, description = "Player updated", body = PlayerListItemDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_player_phone(
    State(state): State<AppState>,
    Path(player_id): Path<i32>,
    Json(request): Json<UpdatePlayerPhoneDto>,
) -> Result<impl IntoResponse, Error> {
    let player = PlayerService::new(&state.db)
        .update_phone_number(player_id, request)
        .await?;

    Ok((StatusCode::OK, Json(player)))
}
