//! Notification factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating notifications belonging to an existing batch.
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    batch_id: i32,
    student_id: Option<i32>,
    title: String,
    message: String,
    is_read: bool,
    created_at: DateTime<Utc>,
}

impl<'a> NotificationFactory<'a> {
    /// Creates a new NotificationFactory with default values.
    ///
    /// Defaults:
    /// - student_id: `None` (global)
    /// - title / message: `"Notice"` / `"Message"`
    /// - is_read: `false`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `batch_id` - ID of the batch that owns the notification
    pub fn new(db: &'a DatabaseConnection, batch_id: i32) -> Self {
        Self {
            db,
            batch_id,
            student_id: None,
            title: "Notice".to_string(),
            message: "Message".to_string(),
            is_read: false,
            created_at: Utc::now(),
        }
    }

    /// Sets the recipient (`None` for a global notification).
    pub fn student_id(mut self, student_id: Option<i32>) -> Self {
        self.student_id = student_id;
        self
    }

    /// Sets the read flag.
    pub fn read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the notification.
    ///
    /// # Returns
    /// - `Ok(entity::notification::Model)` - Created notification
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            id: ActiveValue::NotSet,
            student_id: ActiveValue::Set(self.student_id),
            batch_id: ActiveValue::Set(self.batch_id),
            title: ActiveValue::Set(self.title),
            message: ActiveValue::Set(self.message),
            attachment_url: ActiveValue::Set(None),
            is_read: ActiveValue::Set(self.is_read),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unread notification for a recipient inside a batch.
pub async fn create_notification(
    db: &DatabaseConnection,
    batch_id: i32,
    student_id: Option<i32>,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db, batch_id)
        .student_id(student_id)
        .build()
        .await
}
