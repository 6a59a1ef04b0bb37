use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        log::{AttendanceLogDto, GoalAssistLogDto},
    },
    server::{error::Error, model::app::AppState, service::stats::StatsService},
};

pub static LOG_TAG: &str = "log";

/// Goal and assist contributions per match, most recent match first
#[utoipa::path(
    get,
    path = "/api/goals",
    tag = LOG_TAG,
    responses(
        (status = 200, description = "Goal/assist log", body = Vec<GoalAssistLogDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_goal_log(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let log = StatsService::new(&state.db).goal_assist_log().await?;

    Ok((StatusCode::OK, Json(log)))
}

/// Goal and assist contributions per match; same content as `/api/goals`
#[utoipa::path(
    get,
    path = "/api/assists",
    tag = LOG_TAG,
    responses(
        (status = 200, description = "Goal/assist log", body = Vec<GoalAssistLogDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assist_log(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let log = StatsService::new(&state.db).goal_assist_log().await?;

    Ok((StatusCode::OK, Json(log)))
}

/// Roster of every match, most recent match first
#[utoipa::path(
    get,
    path = "/api/attendance",
    tag = LOG_TAG,
    responses(
        (status = 200, description = "Attendance log", body = Vec<AttendanceLogDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendance_log(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let log = StatsService::new(&state.db).attendance_log().await?;

    Ok((StatusCode::OK, Json(log)))
}
