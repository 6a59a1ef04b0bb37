use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, season::HomeDto},
    server::{error::Error, model::app::AppState, service::stats::StatsService},
};

pub static HOME_TAG: &str = "home";

/// Season tally, upcoming matches and the goal, assist and attendance rankings
#[utoipa::path(
    get,
    path = "/api/home",
    tag = HOME_TAG,
    responses(
        (status = 200, description = "Home screen bundle", body = HomeDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_home(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let home = StatsService::new(&state.db).home().await?;

    Ok((StatusCode::OK, Json(home)))
}
