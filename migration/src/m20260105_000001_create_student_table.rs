use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string_uniq(Student::AdmissionNumber))
                    .col(string(Student::Name))
                    .col(string_null(Student::ClassGrade))
                    .col(string_null(Student::Section))
                    .col(
                        timestamp_with_time_zone(Student::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Audience resolution filters on grade and section
        manager
            .create_index(
                Index::create()
                    .name("idx_student_class_grade_section")
                    .table(Student::Table)
                    .col(Student::ClassGrade)
                    .col(Student::Section)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_student_class_grade_section")
                    .table(Student::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    AdmissionNumber,
    Name,
    ClassGrade,
    Section,
    CreatedAt,
}
