//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI is
//! served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/home` - Season tally, schedule and rankings
/// - `GET|POST /api/matches`, `GET|PUT|DELETE /api/matches/{id}` - Match ledger
/// - `GET /api/goals`, `GET /api/assists`, `GET /api/attendance` - Per-match logs
/// - `GET /api/player/{name}`, `GET /api/players`, `PATCH /api/player/id/{id}` - Players
/// - `GET|POST /api/next-matches`, `PUT|DELETE /api/next-matches/{id}` - Match schedule
/// - `GET /api/admin/seed-csv` - Load the CSV exports into an empty ledger
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Navi", description = "Navi football club season ledger API"), tags(
        (name = controller::home::HOME_TAG, description = "Home screen bundle"),
        (name = controller::game::MATCH_TAG, description = "Played match ledger"),
        (name = controller::log::LOG_TAG, description = "Goal/assist and attendance logs"),
        (name = controller::player::PLAYER_TAG, description = "Player roster and profiles"),
        (name = controller::upcoming::UPCOMING_TAG, description = "Scheduled matches"),
        (name = controller::admin::ADMIN_TAG, description = "Administrative operations"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::home::get_home))
        .routes(routes!(
            controller::game::list_matches,
            controller::game::create_match
        ))
        .routes(routes!(
            controller::game::get_match,
            controller::game::update_match,
            controller::game::delete_match
        ))
        .routes(routes!(controller::log::get_goal_log))
        .routes(routes!(controller::log::get_assist_log))
        .routes(routes!(controller::log::get_attendance_log))
        .routes(routes!(controller::player::get_player))
        .routes(routes!(controller::player::list_players))
        .routes(routes!(controller::player::update_player_phone))
        .routes(routes!(
            controller::upcoming::list_upcoming,
            controller::upcoming::create_upcoming
        ))
        .routes(routes!(
            controller::upcoming::update_upcoming,
            controller::upcoming::delete_upcoming
        ))
        .routes(routes!(controller::admin::seed_csv))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
