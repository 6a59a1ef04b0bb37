use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{admin::SeedResultDto, api::ErrorDto},
    server::{error::Error, model::app::AppState, service::seed::SeedService},
};

pub static ADMIN_TAG: &str = "admin";

/// Load the CSV exports into the ledger if it holds no data yet
///
/// Reports `done: false` when the ledger already has data or an export is missing.
#[utoipa::path(
    get,
    path = "/api/admin/seed-csv",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Seed attempt result", body = SeedResultDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn seed_csv(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let outcome = SeedService::new(&state.db)
        .seed_if_empty(&state.seed_dir)
        .await?;

    Ok((StatusCode::OK, Json(SeedResultDto::from(outcome))))
}
