use axum::{extract::State, http::StatusCode, Json};

use crate::response::{DbHealthResponse, HealthResponse};
use crate::state::AppState;

/// GET /health - liveness, never touches the database.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: state.service_name.clone(),
        uptime: state.uptime_secs(),
    })
}

/// GET /health/db
pub async fn db_health_check(State(state): State<AppState>) -> (StatusCode, Json<DbHealthResponse>) {
    match state.health.ping().await {
        Ok(db_up) => (StatusCode::OK, Json(DbHealthResponse::connected(db_up))),
        Err(e) => {
            tracing::error!("Database health check failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(DbHealthResponse::down(e.to_string())))
        }
    }
}
