//! Notification batch and notification repositories.
//!
//! A batch records one dispatch action and owns the per-recipient notifications created for
//! it. Read progress is never stored on the batch; `stats` counts it from the notifications
//! every time it is asked.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::notification::{
    BatchStats, DispatchNotificationParams, InboxParams, Notification, NotificationBatch,
};

/// Repository providing database operations for notification batches.
pub struct NotificationBatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationBatchRepository<'a, C> {
    /// Creates a new NotificationBatchRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a batch recording the dispatch content and its raw selector fields.
    ///
    /// # Arguments
    /// - `params` - Validated dispatch parameters
    ///
    /// # Returns
    /// - `Ok(NotificationBatch)` - The created batch
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: &DispatchNotificationParams,
    ) -> Result<NotificationBatch, DbErr> {
        let entity = entity::notification_batch::ActiveModel {
            title: ActiveValue::Set(params.title.clone()),
            message: ActiveValue::Set(params.message.clone()),
            attachment_url: ActiveValue::Set(params.attachment_url.clone()),
            target_student_id: ActiveValue::Set(params.target_student_id),
            target_grade: ActiveValue::Set(params.target_grade.clone()),
            target_section: ActiveValue::Set(params.target_section.clone()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(NotificationBatch::from_entity(entity))
    }

    /// Finds a batch by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<NotificationBatch>, DbErr> {
        let entity = entity::prelude::NotificationBatch::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(NotificationBatch::from_entity))
    }

    /// Gets batches newest first.
    ///
    /// Batches created in the same instant are ordered by ID descending.
    ///
    /// # Arguments
    /// - `skip` - Number of batches to skip
    /// - `limit` - Maximum number of batches to return
    ///
    /// # Returns
    /// - `Ok(Vec<NotificationBatch>)` - Batches in display order
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_recent(&self, skip: u64, limit: u64) -> Result<Vec<NotificationBatch>, DbErr> {
        let entities = entity::prelude::NotificationBatch::find()
            .order_by_desc(entity::notification_batch::Column::CreatedAt)
            .order_by_desc(entity::notification_batch::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(NotificationBatch::from_entity)
            .collect())
    }

    /// Counts the notifications of a batch and how many of them are read.
    ///
    /// # Arguments
    /// - `batch_id` - ID of the batch
    ///
    /// # Returns
    /// - `Ok(BatchStats)` - Current totals; zero for a batch without notifications
    /// - `Err(DbErr)` - Database error during count
    pub async fn stats(&self, batch_id: i32) -> Result<BatchStats, DbErr> {
        let total = entity::prelude::Notification::find()
            .filter(entity::notification::Column::BatchId.eq(batch_id))
            .count(self.db)
            .await?;

        let read = entity::prelude::Notification::find()
            .filter(entity::notification::Column::BatchId.eq(batch_id))
            .filter(entity::notification::Column::IsRead.eq(true))
            .count(self.db)
            .await?;

        Ok(BatchStats { total, read })
    }
}

/// Repository providing database operations for individual notifications.
pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    /// Creates a new NotificationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates one unread notification per recipient, copying the batch content.
    ///
    /// # Arguments
    /// - `batch` - Batch the notifications belong to
    /// - `recipients` - Student IDs, or `None` for a single global notification
    ///
    /// # Returns
    /// - `Ok(Vec<Notification>)` - Created notifications in recipient order; empty for no
    ///   recipients
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_for_recipients(
        &self,
        batch: &NotificationBatch,
        recipients: &[Option<i32>],
    ) -> Result<Vec<Notification>, DbErr> {
        let mut notifications = Vec::with_capacity(recipients.len());

        for recipient in recipients {
            let entity = entity::notification::ActiveModel {
                student_id: ActiveValue::Set(*recipient),
                batch_id: ActiveValue::Set(batch.id),
                title: ActiveValue::Set(batch.title.clone()),
                message: ActiveValue::Set(batch.message.clone()),
                attachment_url: ActiveValue::Set(batch.attachment_url.clone()),
                is_read: ActiveValue::Set(false),
                created_at: ActiveValue::Set(batch.created_at),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            notifications.push(Notification::from_entity(entity));
        }

        Ok(notifications)
    }

    /// Finds a notification by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Notification>, DbErr> {
        let entity = entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Notification::from_entity))
    }

    /// Sets the read flag of a notification.
    ///
    /// # Arguments
    /// - `id` - ID of the notification
    ///
    /// # Returns
    /// - `Ok(Notification)` - The updated notification
    /// - `Err(DbErr::RecordNotFound)` - No notification with that ID
    /// - `Err(DbErr)` - Other database error
    pub async fn mark_read(&self, id: i32) -> Result<Notification, DbErr> {
        let existing = entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Notification with id {} not found",
                id
            )))?;

        let mut active = existing.into_active_model();
        active.is_read = ActiveValue::Set(true);
        let entity = active.update(self.db).await?;

        Ok(Notification::from_entity(entity))
    }

    /// Gets the inbox of a student: their own notifications plus every global one.
    ///
    /// Unread notifications come first, each group newest first.
    ///
    /// # Arguments
    /// - `params` - Student and skip/limit
    ///
    /// # Returns
    /// - `Ok(Vec<Notification>)` - Notifications in display order
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_for_student(&self, params: InboxParams) -> Result<Vec<Notification>, DbErr> {
        let entities = entity::prelude::Notification::find()
            .filter(
                Condition::any()
                    .add(entity::notification::Column::StudentId.eq(params.student_id))
                    .add(entity::notification::Column::StudentId.is_null()),
            )
            .order_by_asc(entity::notification::Column::IsRead)
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .offset(params.skip)
            .limit(params.limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Notification::from_entity).collect())
    }
}
