use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        game::{CreateMatchDto, MatchDetailDto, MatchDto},
    },
    server::{
        error::{game::MatchError, Error},
        model::app::AppState,
        service::game::MatchService,
    },
};

pub static MATCH_TAG: &str = "match";

/// List every played match, most recent first
#[utoipa::path(
    get,
    path = "/api/matches",
    tag = MATCH_TAG,
    responses(
        (status = 200, description = "Played matches", body = Vec<MatchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_matches(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let matches = MatchService::new(&state.db).list_matches().await?;

    Ok((StatusCode::OK, Json(matches)))
}

/// Record a played match with its roster and goal/assist records
///
/// The result is derived from the score and the match is counted in its season's tally.
/// Attendees and record lines referring to unknown players are ignored.
#[utoipa::path(
    post,
    path = "/api/matches",
    tag = MATCH_TAG,
    request_body = CreateMatchDto,
    responses(
        (status = 200, description = "Match recorded", body = MatchDto),
        (status = 400, description = "Match date missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_match(
    State(state): State<AppState>,
    Json(request): Json<CreateMatchDto>,
) -> Result<impl IntoResponse, Error> {
    let game = MatchService::new(&state.db).create_match(request).await?;

    Ok((StatusCode::OK, Json(game)))
}

/// Get a match with its roster and goal/assist records
#[utoipa::path(
    get,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Match detail", body = MatchDetailDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_match(
    State(state): State<AppState>,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let detail = MatchService::new(&state.db)
        .match_detail(match_id)
        .await?
        .ok_or(MatchError::MatchNotFound(match_id))?;

    Ok((StatusCode::OK, Json(detail)))
}

/// Replace a match, its roster and its goal/assist records
#[utoipa::path(
    put,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = CreateMatchDto,
    responses(
        (status = 200, description = "Match updated", body = MatchDto),
        (status = 400, description = "Match date missing", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_match(
    State(state): State<AppState>,
    Path(match_id): Path<i32>,
    Json(request): Json<CreateMatchDto>,
) -> Result<impl IntoResponse, Error> {
    let game = MatchService::new(&state.db)
        .update_match(match_id, request)
        .await?;

    Ok((StatusCode::OK, Json(game)))
}

/// Delete a match and remove it from its season's tally
#[utoipa::path(
    delete,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 204, description = "Match deleted"),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_match(
    State(state): State<AppState>,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    MatchService::new(&state.db).delete_match(match_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
