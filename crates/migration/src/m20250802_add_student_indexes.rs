use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Grouping keys for the statistics queries
        manager
            .create_index(
                Index::create()
                    .name("idx_students_graduation_year_gender")
                    .table(Students::Table)
                    .col(Students::GraduationYear)
                    .col(Students::Gender)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_students_department")
                    .table(Students::Table)
                    .col(Students::Department)
                    .to_owned(),
            )
            .await?;

        // Default list ordering
        manager
            .create_index(
                Index::create()
                    .name("idx_students_created_at")
                    .table(Students::Table)
                    .col(Students::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_students_created_at",
            "idx_students_department",
            "idx_students_graduation_year_gender",
        ] {
            manager
                .drop_index(Index::drop().name(name).table(Students::Table).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(Iden)]
enum Students {
    Table,
    Department,
    GraduationYear,
    Gender,
    CreatedAt,
}
