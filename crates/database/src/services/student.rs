use crate::{entities::students, error::ServiceError};
use chrono::Utc;
use log::{debug, error, info, warn};
use models::input::StudentInput;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};
use uuid::Uuid;

pub struct StudentService;

impl StudentService {
    /// Get every student, most recently created first
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<students::Model>, ServiceError> {
        debug!("Listing students");

        students::Entity::find()
            .order_by_desc(students::Column::CreatedAt)
            .all(db)
            .await
            .map_err(|err| {
                error!("Failed to list students: {err}");
                ServiceError::Retrieval(err)
            })
    }

    /// Get a single student by ID
    pub async fn get_by_id(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<students::Model, ServiceError> {
        debug!("Fetching student {id}");

        students::Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(|err| {
                error!("Failed to fetch student {id}: {err}");
                ServiceError::FetchFailed(err)
            })?
            .ok_or_else(|| Self::not_found(id))
    }

    /// Insert a new student; the store assigns nothing, so `id` and
    /// `created_at` are generated here
    pub async fn create(
        db: &DatabaseConnection,
        input: StudentInput,
    ) -> Result<students::Model, ServiceError> {
        let mut student = students::ActiveModel {
            id: Set(Uuid::new_v4()),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        student.apply(input.prepare());

        let student = student.insert(db).await.map_err(|err| {
            error!("Failed to create student: {err}");
            ServiceError::CreateFailed(err)
        })?;

        info!("Created student {} ({})", student.id, student.student_id);
        Ok(student)
    }

    /// Replace every mutable field of an existing student
    pub async fn update(
        db: &DatabaseConnection,
        id: Uuid,
        input: StudentInput,
    ) -> Result<students::Model, ServiceError> {
        let existing = students::Entity::find_by_id(id)
            .one(db)
            .await
            .map_err(|err| {
                error!("Failed to load student {id} for update: {err}");
                ServiceError::UpdateFailed(err)
            })?
            .ok_or_else(|| Self::not_found(id))?;

        let mut student: students::ActiveModel = existing.into();
        student.apply(input.prepare());

        let student = student.update(db).await.map_err(|err| match err {
            // Removed between the lookup and the write
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => Self::not_found(id),
            err => {
                error!("Failed to update student {id}: {err}");
                ServiceError::UpdateFailed(err)
            }
        })?;

        info!("Updated student {id}");
        Ok(student)
    }

    fn not_found(id: Uuid) -> ServiceError {
        warn!("Student {id} not found");
        ServiceError::NotFound(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::StudentService;
    use crate::error::ServiceError;
    use crate::services::statistics::StatisticsService;
    use crate::test_utils::{setup_test_db, student_input};
    use chrono::{NaiveDate, Utc};
    use models::{
        form::{StudentForm, Submission},
        student::{Gender, Label, Status},
    };
    use sea_orm::ConnectionTrait;
    use std::time::Duration;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_create_assigns_id_and_derives_year() {
        let db = setup_test_db().await;
        let before = Utc::now();

        let mut input = student_input("PHY-1", "Physics", Some("2023-06-30"), Some(Gender::Male));
        input.gpa = Some(3.5);

        let student = StudentService::create(&db, input).await.unwrap();

        assert!(!student.id.is_nil());
        // Some stores keep only microseconds
        assert!(student.created_at.timestamp_micros() >= before.timestamp_micros());
        assert_eq!(student.department, "Physics");
        assert_eq!(student.graduation_year, Some(2023));
        assert_eq!(student.status_label(), Label::Known(Status::Graduated));
        assert_eq!(student.gpa, Some(3.5));
        assert_eq!(student.gender.as_deref(), Some("Male"));

        let listed = StudentService::list(&db).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, student.id);
    }

    #[tokio::test]
    async fn test_create_without_graduation_date() {
        let db = setup_test_db().await;

        let student = StudentService::create(&db, student_input("HIS-1", "History", None, None))
            .await
            .unwrap();

        assert_eq!(student.graduation_date, None);
        assert_eq!(student.graduation_year, None);
        assert_eq!(student.status_label(), Label::Known(Status::Enrolled));
        assert_eq!(student.gpa, None);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let db = setup_test_db().await;

        for id in ["A-1", "A-2", "A-3"] {
            StudentService::create(&db, student_input(id, "Law", None, None))
                .await
                .unwrap();
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        let ids: Vec<String> = StudentService::list(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.student_id)
            .collect();

        assert_eq!(ids, vec!["A-3", "A-2", "A-1"]);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let db = setup_test_db().await;
        let created = StudentService::create(&db, student_input("GEO-1", "Geology", None, None))
            .await
            .unwrap();

        let fetched = StudentService::get_by_id(&db, created.id).await.unwrap();
        assert_eq!(fetched, created);

        let missing = StudentService::get_by_id(&db, Uuid::new_v4()).await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let db = setup_test_db().await;
        let created = StudentService::create(
            &db,
            student_input("ZOO-1", "Zoology", Some("2022-01-15"), Some(Gender::Female)),
        )
        .await
        .unwrap();

        let mut input = student_input("ZOO-1", "Botany and Microbiology", None, None);
        input.thesis = Some("Moss in Mandalay".to_string());

        let updated = StudentService::update(&db, created.id, input).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.department, "Botany and Microbiology");
        assert_eq!(updated.graduation_date, None);
        assert_eq!(updated.graduation_year, None);
        assert_eq!(updated.gender, None);
        assert_eq!(updated.thesis.as_deref(), Some("Moss in Mandalay"));

        let fetched = StudentService::get_by_id(&db, created.id).await.unwrap();
        assert_eq!(fetched, updated);
    }

    #[tokio::test]
    async fn test_update_recomputes_graduation_year() {
        let db = setup_test_db().await;
        let created = StudentService::create(&db, student_input("MAT-1", "Mathematics", None, None))
            .await
            .unwrap();

        let input = student_input("MAT-1", "Mathematics", Some("2026-07-01"), None);
        let updated = StudentService::update(&db, created.id, input).await.unwrap();

        assert_eq!(updated.graduation_year, Some(2026));
        assert_eq!(updated.graduation_date, NaiveDate::from_ymd_opt(2026, 7, 1));
    }

    #[tokio::test]
    async fn test_update_missing_student() {
        let db = setup_test_db().await;

        let result =
            StudentService::update(&db, Uuid::new_v4(), student_input("X-1", "Law", None, None))
                .await;

        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_duplicate_email_fails_create() {
        let db = setup_test_db().await;
        StudentService::create(&db, student_input("ENG-1", "English", None, None))
            .await
            .unwrap();

        let mut duplicate = student_input("ENG-2", "English", None, None);
        duplicate.email = "eng-1@uni.edu".to_string();

        let result = StudentService::create(&db, duplicate).await;
        assert!(matches!(result, Err(ServiceError::CreateFailed(_))));
        assert_eq!(StudentService::list(&db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_student_id_fails_update() {
        let db = setup_test_db().await;
        StudentService::create(&db, student_input("LAW-1", "Law", None, None))
            .await
            .unwrap();
        let second = StudentService::create(&db, student_input("LAW-2", "Law", None, None))
            .await
            .unwrap();

        let mut clash = student_input("LAW-1", "Law", None, None);
        clash.email = "someone-else@uni.edu".to_string();

        let result = StudentService::update(&db, second.id, clash).await;
        assert!(matches!(result, Err(ServiceError::UpdateFailed(_))));
    }

    #[tokio::test]
    async fn test_edit_form_round_trip() {
        let db = setup_test_db().await;
        let mut input = student_input("CS-9", "Computer Science", Some("2024-12-20"), None);
        input.gpa = Some(3.25);
        let created = StudentService::create(&db, input).await.unwrap();

        let mut form = StudentForm::from(&created);
        assert_eq!(form.graduation_date, "2024-12-20");
        assert_eq!(form.gpa, "3.25");
        assert_eq!(form.gender, "");
        assert_eq!(form.thesis, "");

        form.advisor = "Dr. Thant".to_string();

        let Submission::Update(id, input) = form.submit().unwrap() else {
            panic!("a prefilled form must submit as an update");
        };
        let updated = StudentService::update(&db, id, input).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.advisor.as_deref(), Some("Dr. Thant"));
        assert_eq!(updated.graduation_year, Some(2024));
        assert_eq!(updated.gpa, Some(3.25));
    }

    #[tokio::test]
    async fn test_reads_rows_with_unrecognized_labels() {
        let db = setup_test_db().await;
        let created = StudentService::create(
            &db,
            student_input("P-1", "Physics", Some("2022-06-01"), Some(Gender::Male)),
        )
        .await
        .unwrap();
        StudentService::create(&db, student_input("P-2", "Physics", None, None))
            .await
            .unwrap();

        db.execute_unprepared(
            "UPDATE students SET gender = 'Nonbinary', status = 'DEFERRED' \
             WHERE student_id = 'P-1'",
        )
        .await
        .unwrap();

        let listed = StudentService::list(&db).await.unwrap();
        assert_eq!(listed.len(), 2);

        let report = StatisticsService::compute(&db).await.unwrap();
        assert_eq!(report.overview.total, listed.len() as u64);

        let fetched = StudentService::get_by_id(&db, created.id).await.unwrap();
        assert_eq!(
            fetched.gender_label(),
            Some(Label::Unrecognized("Nonbinary".to_string()))
        );
        assert_eq!(
            fetched.status_label(),
            Label::Unrecognized("DEFERRED".to_string())
        );
        assert_eq!(StudentForm::from(&fetched).gender, "Nonbinary");
    }

    #[tokio::test]
    async fn test_single_fetch_failure_message() {
        let db = setup_test_db().await;
        db.execute_unprepared("DROP TABLE students").await.unwrap();

        let result = StudentService::get_by_id(&db, Uuid::new_v4()).await;

        let Err(err) = result else {
            panic!("fetching from a missing table must fail");
        };
        assert!(matches!(err, ServiceError::FetchFailed(_)));
        assert_eq!(err.to_string(), "Failed to fetch student");
    }
}
