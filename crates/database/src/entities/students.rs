use models::{
    directory::DirectoryEntry,
    form::{StudentForm, date_field, gpa_field},
    input::StudentChanges,
    student::{Gender, Label, Status},
};
use sea_orm::{ActiveValue::Set, entity::prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub student_id: String,
    pub department: String,
    pub program: String,
    pub enrollment_date: Option<Date>,
    pub graduation_date: Option<Date>,
    pub graduation_year: Option<i32>, // Derived from graduation_date
    /// Stored label; see [`Model::status_label`]
    pub status: String,
    pub gpa: Option<f64>,
    pub gender: Option<String>,
    pub thesis: Option<String>,
    pub advisor: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn status_label(&self) -> Label<Status> {
        Label::from_stored(self.status.clone())
    }

    pub fn gender_label(&self) -> Option<Label<Gender>> {
        self.gender.clone().map(Label::from_stored)
    }
}

impl ActiveModel {
    /// Overwrites every mutable column, leaving `id` and `created_at` alone
    pub fn apply(&mut self, changes: StudentChanges) {
        self.first_name = Set(changes.first_name);
        self.last_name = Set(changes.last_name);
        self.email = Set(changes.email);
        self.student_id = Set(changes.student_id);
        self.department = Set(changes.department);
        self.program = Set(changes.program);
        self.enrollment_date = Set(changes.enrollment_date);
        self.graduation_date = Set(changes.graduation_date);
        self.graduation_year = Set(changes.graduation_year);
        self.status = Set(changes.status.to_value());
        self.gpa = Set(changes.gpa);
        self.gender = Set(changes.gender.map(|gender| gender.to_value()));
        self.thesis = Set(changes.thesis);
        self.advisor = Set(changes.advisor);
    }
}

impl DirectoryEntry for Model {
    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn student_id(&self) -> &str {
        &self.student_id
    }

    fn department(&self) -> &str {
        &self.department
    }

    fn graduation_year(&self) -> Option<i32> {
        self.graduation_year
    }

    fn gender(&self) -> Option<Gender> {
        self.gender_label().and_then(Label::known)
    }
}

/// Prefills the edit form from a stored record
impl From<&Model> for StudentForm {
    fn from(student: &Model) -> Self {
        Self {
            id: Some(student.id),
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            email: student.email.clone(),
            student_id: student.student_id.clone(),
            department: student.department.clone(),
            program: student.program.clone(),
            enrollment_date: date_field(student.enrollment_date),
            graduation_date: date_field(student.graduation_date),
            status: student.status.clone(),
            gpa: gpa_field(student.gpa),
            gender: student.gender.clone().unwrap_or_default(),
            thesis: student.thesis.clone().unwrap_or_default(),
            advisor: student.advisor.clone().unwrap_or_default(),
        }
    }
}
