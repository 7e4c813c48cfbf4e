pub mod health;
pub mod statistics;
pub mod student;

use crate::{doc::openapi_json, state::AppState};
use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            "/students",
            get(student::list_students).post(student::create_student),
        )
        .route("/students/directory", get(student::student_directory))
        .route(
            "/students/{id}",
            get(student::get_student_by_id).put(student::update_student),
        )
        .route("/statistics", get(statistics::get_statistics))
        .route("/statistics/dashboard", get(statistics::get_dashboard))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}
