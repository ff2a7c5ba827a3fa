use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NotificationBatch::Table)
                    .if_not_exists()
                    .col(pk_auto(NotificationBatch::Id))
                    .col(string(NotificationBatch::Title))
                    .col(text(NotificationBatch::Message))
                    .col(string_null(NotificationBatch::AttachmentUrl))
                    .col(integer_null(NotificationBatch::TargetStudentId))
                    .col(string_null(NotificationBatch::TargetGrade))
                    .col(string_null(NotificationBatch::TargetSection))
                    .col(
                        timestamp_with_time_zone(NotificationBatch::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NotificationBatch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NotificationBatch {
    Table,
    Id,
    Title,
    Message,
    AttachmentUrl,
    TargetStudentId,
    TargetGrade,
    TargetSection,
    CreatedAt,
}
