//! Notification batch factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating notification batches with customizable fields.
///
/// Only the batch row is inserted. Use `NotificationFactory` or
/// `helpers::create_batch_with_notifications` for the rows it owns.
pub struct NotificationBatchFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    message: String,
    attachment_url: Option<String>,
    target_student_id: Option<i32>,
    target_grade: Option<String>,
    target_section: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> NotificationBatchFactory<'a> {
    /// Creates a new NotificationBatchFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Notice {id}"`
    /// - message: `"Message {id}"`
    /// - no attachment, no target (global)
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Notice {}", id),
            message: format!("Message {}", id),
            attachment_url: None,
            target_student_id: None,
            target_grade: None,
            target_section: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the target grade recorded on the batch.
    pub fn target_grade(mut self, grade: impl Into<String>) -> Self {
        self.target_grade = Some(grade.into());
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the batch.
    ///
    /// # Returns
    /// - `Ok(entity::notification_batch::Model)` - Created batch
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::notification_batch::Model, DbErr> {
        entity::notification_batch::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            message: ActiveValue::Set(self.message),
            attachment_url: ActiveValue::Set(self.attachment_url),
            target_student_id: ActiveValue::Set(self.target_student_id),
            target_grade: ActiveValue::Set(self.target_grade),
            target_section: ActiveValue::Set(self.target_section),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a global notification batch with default values.
pub async fn create_notification_batch(
    db: &DatabaseConnection,
) -> Result<entity::notification_batch::Model, DbErr> {
    NotificationBatchFactory::new(db).build().await
}
