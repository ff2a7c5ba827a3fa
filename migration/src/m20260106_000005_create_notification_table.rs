use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_student_table::Student,
    m20260106_000004_create_notification_batch_table::NotificationBatch,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notification::Table)
                    .if_not_exists()
                    .col(pk_auto(Notification::Id))
                    .col(integer_null(Notification::StudentId))
                    .col(integer(Notification::BatchId))
                    .col(string(Notification::Title))
                    .col(text(Notification::Message))
                    .col(string_null(Notification::AttachmentUrl))
                    .col(boolean(Notification::IsRead).default(false))
                    .col(
                        timestamp_with_time_zone(Notification::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_student_id")
                            .from(Notification::Table, Notification::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notification_batch_id")
                            .from(Notification::Table, Notification::BatchId)
                            .to(NotificationBatch::Table, NotificationBatch::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Stats count rows per batch, the inbox reads rows per student
        manager
            .create_index(
                Index::create()
                    .name("idx_notification_batch_id")
                    .table(Notification::Table)
                    .col(Notification::BatchId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_notification_student_id")
                    .table(Notification::Table)
                    .col(Notification::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_notification_student_id")
                    .table(Notification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_notification_batch_id")
                    .table(Notification::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Notification::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Notification {
    Table,
    Id,
    StudentId,
    BatchId,
    Title,
    Message,
    AttachmentUrl,
    IsRead,
    CreatedAt,
}
