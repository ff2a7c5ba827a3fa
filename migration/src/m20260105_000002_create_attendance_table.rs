use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_student_table::Student;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(pk_auto(Attendance::Id))
                    .col(integer(Attendance::StudentId))
                    .col(date(Attendance::Date))
                    .col(string(Attendance::Status))
                    .col(string_null(Attendance::Remarks))
                    .col(string_null(Attendance::ClassGrade))
                    .col(string_null(Attendance::Section))
                    .col(string_null(Attendance::AbsenceType))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_student_id")
                            .from(Attendance::Table, Attendance::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One attendance mark per student per day
        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_student_date")
                    .table(Attendance::Table)
                    .col(Attendance::StudentId)
                    .col(Attendance::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_attendance_student_date")
                    .table(Attendance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Attendance {
    Table,
    Id,
    StudentId,
    Date,
    Status,
    Remarks,
    ClassGrade,
    Section,
    AbsenceType,
}
