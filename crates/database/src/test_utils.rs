use crate::db::create_connection;
use migration::{Migrator, MigratorTrait};
use models::{input::StudentInput, student::Gender};
use sea_orm::DatabaseConnection;

/// Fresh, fully migrated in-memory database
pub async fn setup_test_db() -> DatabaseConnection {
    let db = create_connection("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

pub fn student_input(
    student_id: &str,
    department: &str,
    graduation_date: Option<&str>,
    gender: Option<Gender>,
) -> StudentInput {
    StudentInput {
        first_name: format!("First {student_id}"),
        last_name: format!("Last {student_id}"),
        email: format!("{}@uni.edu", student_id.to_lowercase()),
        student_id: student_id.to_string(),
        department: department.to_string(),
        program: format!("BSc {department}"),
        enrollment_date: None,
        graduation_date: graduation_date
            .map(|date| date.parse().expect("test dates are YYYY-MM-DD")),
        status: None,
        gpa: None,
        gender,
        thesis: None,
        advisor: None,
    }
}
