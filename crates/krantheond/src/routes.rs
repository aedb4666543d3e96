//! API routes for krantheond

use crate::pipeline;
use crate::server::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use krantheon_shared::{
    CommandRequest, CommandResponse, ErrorResponse, Fixture, FixtureResponse, KrantheonError,
    StatusResponse, STATUS_MESSAGE,
};
use std::sync::Arc;
use tracing::{error, info, warn};

type AppStateArc = Arc<AppState>;
type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(err: KrantheonError) -> ApiError {
    let status = match err {
        KrantheonError::Parameter(_) => StatusCode::UNPROCESSABLE_ENTITY,
        KrantheonError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse::from(&err)))
}

// ============================================================================
// Status Routes
// ============================================================================

pub fn status_routes() -> Router<AppStateArc> {
    Router::new().route("/", get(root))
}

async fn root(State(state): State<AppStateArc>) -> Json<StatusResponse> {
    info!(
        "  Status check, uptime {}s",
        state.start_time.elapsed().as_secs()
    );
    Json(StatusResponse {
        status: "ok".to_string(),
        message: STATUS_MESSAGE.to_string(),
    })
}

// ============================================================================
// Command Routes
// ============================================================================

pub fn command_routes() -> Router<AppStateArc> {
    Router::new().route("/api/command", post(run_command))
}

async fn run_command(Json(req): Json<CommandRequest>) -> Result<Json<CommandResponse>, ApiError> {
    info!("  Command request: {:?}", req.command);

    pipeline::execute(&req).map(Json).map_err(|e| {
        warn!("  Command failed: {}", e);
        api_error(e)
    })
}

// ============================================================================
// Fixture Routes
// ============================================================================

pub fn fixture_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/api/agency", get(|| serve_fixture(Fixture::Agency)))
        .route("/api/athletes", get(|| serve_fixture(Fixture::Athletes)))
        .route("/api/hca", get(|| serve_fixture(Fixture::Hca)))
        .route("/api/campaigns", get(|| serve_fixture(Fixture::Campaigns)))
}

async fn serve_fixture(fixture: Fixture) -> Result<Json<FixtureResponse>, ApiError> {
    pipeline::fixture_response(fixture).map(Json).map_err(|e| {
        error!("  Fixture {} failed: {}", fixture, e);
        api_error(e)
    })
}
