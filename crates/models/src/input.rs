use crate::{
    coerce,
    student::{Gender, Status},
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Body accepted when creating or replacing a student record
///
/// Only the mutable columns are listed; `id`, `createdAt` and the derived
/// `graduationYear` are rejected like any other unknown field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StudentInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub student_id: String,
    pub department: String,
    pub program: String,

    #[serde(default, deserialize_with = "coerce::optional_date")]
    pub enrollment_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "coerce::optional_date")]
    pub graduation_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "coerce::optional_parsed")]
    pub status: Option<Status>,

    /// Number or numeric text; anything outside 0-4 is stored as null
    #[serde(default, deserialize_with = "coerce::lenient_gpa")]
    pub gpa: Option<f64>,

    #[serde(default, deserialize_with = "coerce::optional_parsed")]
    pub gender: Option<Gender>,

    #[serde(default, deserialize_with = "coerce::optional_text")]
    pub thesis: Option<String>,

    #[serde(default, deserialize_with = "coerce::optional_text")]
    pub advisor: Option<String>,
}

/// Every mutable column of a student row, with derived fields filled in
#[derive(Debug, Clone, PartialEq)]
pub struct StudentChanges {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub student_id: String,
    pub department: String,
    pub program: String,
    pub enrollment_date: Option<NaiveDate>,
    pub graduation_date: Option<NaiveDate>,
    pub graduation_year: Option<i32>,
    pub status: Status,
    pub gpa: Option<f64>,
    pub gender: Option<Gender>,
    pub thesis: Option<String>,
    pub advisor: Option<String>,
}

/// The graduation year always follows the graduation date
pub fn graduation_year(graduation_date: Option<NaiveDate>) -> Option<i32> {
    graduation_date.map(|date| date.year())
}

/// An explicit status wins; otherwise a graduation date implies the student graduated
pub fn resolve_status(status: Option<Status>, graduation_date: Option<NaiveDate>) -> Status {
    match (status, graduation_date) {
        (Some(status), _) => status,
        (None, Some(_)) => Status::Graduated,
        (None, None) => Status::Enrolled,
    }
}

impl StudentInput {
    /// Computes derived columns, producing the values written to the store
    pub fn prepare(self) -> StudentChanges {
        StudentChanges {
            graduation_year: graduation_year(self.graduation_date),
            status: resolve_status(self.status, self.graduation_date),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            student_id: self.student_id,
            department: self.department,
            program: self.program,
            enrollment_date: self.enrollment_date,
            graduation_date: self.graduation_date,
            gpa: self.gpa,
            gender: self.gender,
            thesis: self.thesis,
            advisor: self.advisor,
        }
    }
}
