use crate::{entities::students, error::ServiceError};
use futures::try_join;
use log::{debug, error};
use models::{
    statistics::{DepartmentCount, Overview, StatisticsReport, YearCount, YearGenderCount},
    student::Status,
};
use sea_orm::{
    ActiveEnum, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

pub struct StatisticsService;

impl StatisticsService {
    /// Compute the graduation report
    ///
    /// The grouped counts are independent of each other, so they run
    /// concurrently. Nothing is cached between calls.
    pub async fn compute(db: &DatabaseConnection) -> Result<StatisticsReport, ServiceError> {
        debug!("Computing statistics");

        let (
            graduation_by_year,
            graduation_by_year_and_gender,
            total,
            graduated,
            enrolled,
            by_department,
        ) = try_join!(
            Self::graduation_by_year(db),
            Self::graduation_by_year_and_gender(db),
            Self::count(db, None),
            Self::count(db, Some(Status::Graduated)),
            Self::count(db, Some(Status::Enrolled)),
            Self::by_department(db),
        )
        .map_err(|err| {
            error!("Failed to compute statistics: {err}");
            ServiceError::Statistics(err)
        })?;

        Ok(StatisticsReport {
            graduation_by_year,
            graduation_by_year_and_gender,
            overview: Overview {
                total,
                graduated,
                enrolled,
            },
            by_department,
        })
    }

    /// Graduates per year, newest year first
    async fn graduation_by_year(db: &DatabaseConnection) -> Result<Vec<YearCount>, DbErr> {
        let rows = students::Entity::find()
            .select_only()
            .column(students::Column::GraduationYear)
            .column_as(students::Column::Id.count(), "count")
            .filter(students::Column::GraduationYear.is_not_null())
            .group_by(students::Column::GraduationYear)
            .order_by_desc(students::Column::GraduationYear)
            .into_tuple::<(i32, i64)>()
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(graduation_year, count)| YearCount {
                graduation_year,
                count: count as u64,
            })
            .collect())
    }

    /// Graduates per (year, gender), year descending then gender ascending
    async fn graduation_by_year_and_gender(
        db: &DatabaseConnection,
    ) -> Result<Vec<YearGenderCount>, DbErr> {
        // Gender is read back as plain text so unexpected labels are reported, not dropped
        let rows = students::Entity::find()
            .select_only()
            .column(students::Column::GraduationYear)
            .column(students::Column::Gender)
            .column_as(students::Column::Id.count(), "count")
            .filter(students::Column::GraduationYear.is_not_null())
            .filter(students::Column::Gender.is_not_null())
            .group_by(students::Column::GraduationYear)
            .group_by(students::Column::Gender)
            .order_by_desc(students::Column::GraduationYear)
            .order_by_asc(students::Column::Gender)
            .into_tuple::<(i32, String, i64)>()
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(graduation_year, gender, count)| YearGenderCount {
                graduation_year,
                gender,
                count: count as u64,
            })
            .collect())
    }

    async fn count(db: &DatabaseConnection, status: Option<Status>) -> Result<u64, DbErr> {
        let mut query = students::Entity::find();

        if let Some(status) = status {
            query = query.filter(students::Column::Status.eq(status.to_value()));
        }

        query.count(db).await
    }

    async fn by_department(db: &DatabaseConnection) -> Result<Vec<DepartmentCount>, DbErr> {
        let rows = students::Entity::find()
            .select_only()
            .column(students::Column::Department)
            .column_as(students::Column::Id.count(), "count")
            .group_by(students::Column::Department)
            .order_by_asc(students::Column::Department)
            .into_tuple::<(String, i64)>()
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(department, count)| DepartmentCount {
                department,
                count: count as u64,
            })
            .collect())
    }
}
