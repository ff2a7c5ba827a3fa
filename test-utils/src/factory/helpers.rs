//! Shared helper utilities for factory methods.
//!
//! Provides ID generation for unique test values and convenience methods for creating
//! entities together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a notification batch with one unread notification per given recipient.
///
/// Passing `None` as a recipient creates a global notification.
///
/// # Arguments
/// - `db` - Database connection
/// - `recipients` - Student IDs (or `None` for global) to create notifications for
///
/// # Returns
/// - `Ok((batch, notifications))` - The batch and its notifications in recipient order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_batch_with_notifications(
    db: &DatabaseConnection,
    recipients: &[Option<i32>],
) -> Result<
    (
        entity::notification_batch::Model,
        Vec<entity::notification::Model>,
    ),
    DbErr,
> {
    let batch = crate::factory::notification_batch::create_notification_batch(db).await?;

    let mut notifications = Vec::with_capacity(recipients.len());
    for recipient in recipients {
        let notification = crate::factory::notification::NotificationFactory::new(db, batch.id)
            .student_id(*recipient)
            .build()
            .await?;
        notifications.push(notification);
    }

    Ok((batch, notifications))
}
