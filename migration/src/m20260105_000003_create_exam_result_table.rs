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
                    .table(ExamResult::Table)
                    .if_not_exists()
                    .col(pk_auto(ExamResult::Id))
                    .col(integer(ExamResult::StudentId))
                    .col(string(ExamResult::ExamTitle))
                    .col(date(ExamResult::ExamDate))
                    .col(string(ExamResult::Subject))
                    .col(double(ExamResult::MarksObtained))
                    .col(double(ExamResult::TotalMarks))
                    .col(string(ExamResult::Grade))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_exam_result_student_id")
                            .from(ExamResult::Table, ExamResult::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One result per student per exam subject
        manager
            .create_index(
                Index::create()
                    .name("idx_exam_result_student_exam_subject")
                    .table(ExamResult::Table)
                    .col(ExamResult::StudentId)
                    .col(ExamResult::ExamTitle)
                    .col(ExamResult::Subject)
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
                    .name("idx_exam_result_student_exam_subject")
                    .table(ExamResult::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ExamResult::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ExamResult {
    Table,
    Id,
    StudentId,
    ExamTitle,
    ExamDate,
    Subject,
    MarksObtained,
    TotalMarks,
    Grade,
}
