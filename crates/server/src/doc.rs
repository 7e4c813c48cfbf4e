use crate::{
    dtos::student::{DirectoryResponse, StudentResponse},
    error::ErrorResponse,
    routes::{health, statistics, student},
};
use axum::Json;
use models::{
    chart::{Dashboard, DepartmentShare, YearBar},
    directory::GenderTally,
    input::StudentInput,
    statistics::{DepartmentCount, Overview, StatisticsReport, YearCount, YearGenderCount},
    student::{Gender, Status},
};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        student::list_students,
        student::create_student,
        student::student_directory,
        student::get_student_by_id,
        student::update_student,
        statistics::get_statistics,
        statistics::get_dashboard
    ),
    components(schemas(
        StudentInput,
        StudentResponse,
        DirectoryResponse,
        GenderTally,
        Status,
        Gender,
        StatisticsReport,
        YearCount,
        YearGenderCount,
        DepartmentCount,
        Overview,
        Dashboard,
        YearBar,
        DepartmentShare,
        ErrorResponse
    )),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Students", description = "Student record endpoints"),
        (name = "Statistics", description = "Graduation statistics"),
    ),
    info(
        title = "Student Records API",
        version = "1.0.0",
        description = "Graduate student records and statistics",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
