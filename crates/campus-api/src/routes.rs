use std::time::Duration;

use axum::{
    http::StatusCode,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::handlers::{health, students, teachers};
use crate::state::AppState;

pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/db", get(health::db_health_check));

    let record_routes = Router::new()
        .route("/", get(students::list_students))
        .route("/student", get(students::list_students))
        .route("/addstudent", post(students::add_student))
        .route("/student/{id}", delete(students::delete_student))
        .route("/teacher", get(teachers::list_teachers))
        .route("/addteacher", post(teachers::add_teacher))
        .route("/teacher/{id}", delete(teachers::delete_teacher));

    Router::new()
        .merge(health_routes)
        .merge(record_routes)
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
