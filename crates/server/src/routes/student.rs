use crate::{
    dtos::student::{DirectoryQueryParams, DirectoryResponse, StudentResponse},
    error::{ApiError, ErrorResponse},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use database::{error::ServiceError, services::student::StudentService};
use models::{
    directory::{GenderTally, StudentFilter, selectable_years},
    input::StudentInput,
};
use uuid::Uuid;

/// An ID that is not a UUID cannot name any student
fn parse_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ServiceError::NotFound(id.to_string()).into())
}

/// Get all students, newest first
#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, description = "All students, most recently created first", body = Vec<StudentResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let students = StudentService::list(&state.db).await?;

    Ok(Json(
        students.into_iter().map(StudentResponse::from).collect(),
    ))
}

/// Create a student
#[utoipa::path(
    post,
    path = "/students",
    request_body = StudentInput,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 422, description = "Body does not match the student input shape", body = ErrorResponse),
        (status = 500, description = "Store rejected the student", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn create_student(
    State(state): State<AppState>,
    input: Result<Json<StudentInput>, JsonRejection>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    let Json(input) = input?;
    let student = StudentService::create(&state.db, input).await?;

    Ok((StatusCode::CREATED, Json(student.into())))
}

/// Filtered student list with the options and totals the directory view shows
#[utoipa::path(
    get,
    path = "/students/directory",
    params(DirectoryQueryParams),
    responses(
        (status = 200, description = "Filtered students", body = DirectoryResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn student_directory(
    State(state): State<AppState>,
    Query(params): Query<DirectoryQueryParams>,
) -> Result<Json<DirectoryResponse>, ApiError> {
    let students = StudentService::list(&state.db).await?;

    let filter = StudentFilter::new(params.search.as_deref(), params.year.as_deref());
    let matched = filter.apply(&students);

    Ok(Json(DirectoryResponse {
        years: selectable_years(&students),
        summary: GenderTally::count(matched.iter().copied()),
        students: matched
            .into_iter()
            .cloned()
            .map(StudentResponse::from)
            .collect(),
    }))
}

/// Get a specific student by ID
#[utoipa::path(
    get,
    path = "/students/{id}",
    params(
        ("id" = Uuid, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student found", body = StudentResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn get_student_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StudentResponse>, ApiError> {
    let id = parse_id(&id)?;
    let student = StudentService::get_by_id(&state.db, id).await?;

    Ok(Json(student.into()))
}

/// Replace a student's fields
#[utoipa::path(
    put,
    path = "/students/{id}",
    params(
        ("id" = Uuid, Path, description = "Student ID")
    ),
    request_body = StudentInput,
    responses(
        (status = 200, description = "Student updated", body = StudentResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 422, description = "Body does not match the student input shape", body = ErrorResponse),
        (status = 500, description = "Store rejected the update", body = ErrorResponse)
    ),
    tag = "Students"
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    input: Result<Json<StudentInput>, JsonRejection>,
) -> Result<Json<StudentResponse>, ApiError> {
    let id = parse_id(&id)?;
    let Json(input) = input?;
    let student = StudentService::update(&state.db, id, input).await?;

    Ok(Json(student.into()))
}
