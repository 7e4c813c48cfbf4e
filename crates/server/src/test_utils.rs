use crate::{routes::router, state::AppState};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use database::db::create_connection;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Fresh, fully migrated in-memory database
pub async fn setup_db() -> DatabaseConnection {
    let db = create_connection("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Router backed by a fresh database
pub async fn setup_app() -> Router {
    router(AppState {
        db: setup_db().await,
    })
}

/// Sends one request and decodes the JSON response body (`Null` when empty)
pub async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

pub fn student_body(
    student_id: &str,
    department: &str,
    graduation_date: Option<&str>,
    gender: Option<&str>,
) -> Value {
    json!({
        "firstName": format!("First {student_id}"),
        "lastName": format!("Last {student_id}"),
        "email": format!("{}@uni.edu", student_id.to_lowercase()),
        "studentId": student_id,
        "department": department,
        "program": format!("MSc {department}"),
        "graduationDate": graduation_date,
        "gender": gender,
    })
}
