use crate::{coerce, input::StudentInput};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Editable state of the add/edit student form
///
/// Every optional field is plain text, blank when unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentForm {
    pub id: Option<Uuid>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub student_id: String,
    pub department: String,
    pub program: String,
    pub enrollment_date: String,
    pub graduation_date: String,
    pub status: String,
    pub gpa: String,
    pub gender: String,
    pub thesis: String,
    pub advisor: String,
}

/// What submitting the form asks the directory service to do
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(StudentInput),
    Update(Uuid, StudentInput),
}

/// Formats a date the way a date input expects it
pub fn date_field(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

pub fn gpa_field(gpa: Option<f64>) -> String {
    gpa.map(|gpa| gpa.to_string()).unwrap_or_default()
}

impl StudentForm {
    /// Converts the form into a create or update request
    ///
    /// Dates and enumerations must parse when filled in; an unreadable GPA
    /// is sent as absent.
    pub fn submit(self) -> Result<Submission, String> {
        let input = StudentInput {
            enrollment_date: coerce::parse_date(&self.enrollment_date)?,
            graduation_date: coerce::parse_date(&self.graduation_date)?,
            status: coerce::parse_optional(&self.status)?,
            gpa: coerce::parse_gpa(&self.gpa),
            gender: coerce::parse_optional(&self.gender)?,
            thesis: coerce::non_blank(self.thesis),
            advisor: coerce::non_blank(self.advisor),
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            student_id: self.student_id,
            department: self.department,
            program: self.program,
        };

        Ok(match self.id {
            Some(id) => Submission::Update(id, input),
            None => Submission::Create(input),
        })
    }
}
