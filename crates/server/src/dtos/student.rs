use chrono::{DateTime, NaiveDate, Utc};
use database::entities::students;
use models::{
    directory::GenderTally,
    student::{Gender, Label, Status},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub student_id: String,
    pub department: String,
    pub program: String,
    pub enrollment_date: Option<NaiveDate>,
    pub graduation_date: Option<NaiveDate>,
    pub graduation_year: Option<i32>,
    /// Stored text is passed through when it is not a known status
    #[schema(value_type = Status)]
    pub status: Label<Status>,
    pub gpa: Option<f64>,
    #[schema(value_type = Option<Gender>)]
    pub gender: Option<Label<Gender>>,
    pub thesis: Option<String>,
    pub advisor: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<students::Model> for StudentResponse {
    fn from(student: students::Model) -> Self {
        let status = student.status_label();
        let gender = student.gender_label();

        Self {
            id: student.id,
            first_name: student.first_name,
            last_name: student.last_name,
            email: student.email,
            student_id: student.student_id,
            department: student.department,
            program: student.program,
            enrollment_date: student.enrollment_date,
            graduation_date: student.graduation_date,
            graduation_year: student.graduation_year,
            status,
            gpa: student.gpa,
            gender,
            thesis: student.thesis,
            advisor: student.advisor,
            created_at: student.created_at,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DirectoryQueryParams {
    /// Case-insensitive text matched against names, email, student ID,
    /// department and graduation year
    pub search: Option<String>,

    /// Graduation year, or `ALL`
    pub year: Option<String>,
}

/// The student table as the directory view shows it
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DirectoryResponse {
    pub students: Vec<StudentResponse>,
    /// Graduation years present among all students, newest first
    pub years: Vec<i32>,
    /// Head counts over the filtered students
    pub summary: GenderTally,
}
