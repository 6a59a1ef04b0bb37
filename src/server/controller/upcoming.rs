use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        upcoming::{CreateUpcomingMatchDto, UpcomingMatchDto},
    },
    server::{error::Error, model::app::AppState, service::upcoming::UpcomingMatchService},
};

pub static UPCOMING_TAG: &str = "next-match";

/// List scheduled matches, soonest first
#[utoipa::path(
    get,
    path = "/api/next-matches",
    tag = UPCOMING_TAG,
    responses(
        (status = 200, description = "Scheduled matches", body = Vec<UpcomingMatchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_upcoming(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let upcoming = UpcomingMatchService::new(&state.db).list_upcoming().await?;

    Ok((StatusCode::OK, Json(upcoming)))
}

/// Schedule a match
#[utoipa::path(
    post,
    path = "/api/next-matches",
    tag = UPCOMING_TAG,
    request_body = CreateUpcomingMatchDto,
    responses(
        (status = 200, description = "Match scheduled", body = UpcomingMatchDto),
        (status = 400, description = "Date or opponent missing", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_upcoming(
    State(state): State<AppState>,
    Json(request): Json<CreateUpcomingMatchDto>,
) -> Result<impl IntoResponse, Error> {
    let upcoming = UpcomingMatchService::new(&state.db)
        .create_upcoming(request)
        .await?;

    Ok((StatusCode::OK, Json(upcoming)))
}

/// Replace a scheduled match
#[utoipa::path(
    put,
    path = "/api/next-matches/{id}",
    tag = UPCOMING_TAG,
    params(("id" = i32, Path, description = "Scheduled match ID")),
    request_body = CreateUpcomingMatchDto,
    responses(
        (status = 200, description = "Scheduled match updated", body = UpcomingMatchDto),
        (status = 400, description = "Date or opponent missing", body = ErrorDto),
        (status = 404, description = "Scheduled match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_upcoming(
    State(state): State<AppState>,
    Path(upcoming_match_id): Path<i32>,
    Json(request): Json<CreateUpcomingMatchDto>,
) -> Result<impl IntoResponse, Error> {
    let upcoming = UpcomingMatchService::new(&state.db)
        .update_upcoming(upcoming_match_id, request)
        .await?;

    Ok((StatusCode::OK, Json(upcoming)))
}

/// Remove a scheduled match
#[utoipa::path(
    delete,
    path = "/api/next-matches/{id}",
    tag = UPCOMING_TAG,
    params(("id" = i32, Path, description = "Scheduled match ID")),
    responses(
        (status = 204, description = "Scheduled match deleted"),
        (status = 404, description = "Scheduled match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_upcoming(
    State(state): State<AppState>,
    Path(upcoming_match_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    UpcomingMatchService::new(&state.db)
        .delete_upcoming(upcoming_match_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
