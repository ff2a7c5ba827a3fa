//! Notification fan-out and read tracking.
//!
//! A dispatch turns one request into a batch plus one notification per resolved recipient.
//! Recipients are resolved once, at dispatch time; moving a student to another class later
//! does not change who received what.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        notification::{NotificationBatchRepository, NotificationRepository},
        student::StudentRepository,
    },
    error::{auth::AuthError, AppError},
    model::notification::{
        Audience, BatchStats, DispatchNotificationParams, DispatchedNotifications, InboxParams,
        Notification, NotificationBatchWithStats,
    },
};

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Dispatches a notification to its audience.
    ///
    /// The batch and all notifications are written in one transaction. A filter matching
    /// no students still records the batch, with no notifications.
    ///
    /// # Arguments
    /// - `params` - Validated content and selector fields
    ///
    /// # Returns
    /// - `Ok(DispatchedNotifications)` - The batch with its stats and every notification
    /// - `Err(AppError::NotFound)` - An explicit recipient does not exist; nothing is written
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn dispatch(
        &self,
        params: DispatchNotificationParams,
    ) -> Result<DispatchedNotifications, AppError> {
        let audience = params.audience();
        let txn = self.db.begin().await?;
        let student_repo = StudentRepository::new(&txn);

        if let Audience::Student(student_id) = &audience {
            if student_repo.find_by_id(*student_id).await?.is_none() {
                return Err(AppError::NotFound(format!(
                    "Student {} not found",
                    student_id
                )));
            }
        }

        let batch = NotificationBatchRepository::new(&txn)
            .create(&params)
            .await?;

        let recipients: Vec<Option<i32>> = match &audience {
            Audience::Student(student_id) => vec![Some(*student_id)],
            Audience::Filter { grade, section } => student_repo
                .ids_in_class(grade.as_deref(), section.as_deref())
                .await?
                .into_iter()
                .map(Some)
                .collect(),
            Audience::Global => vec![None],
        };

        let notifications = NotificationRepository::new(&txn)
            .create_for_recipients(&batch, &recipients)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Dispatched batch {} to {:?}: {} notifications",
            batch.id,
            audience,
            notifications.len()
        );

        let stats = BatchStats {
            total: notifications.len() as u64,
            read: 0,
        };

        Ok(DispatchedNotifications {
            batch: NotificationBatchWithStats { batch, stats },
            notifications,
        })
    }

    /// Marks a notification read on behalf of a student.
    ///
    /// Marking an already read notification returns it unchanged.
    ///
    /// # Arguments
    /// - `notification_id` - ID of the notification
    /// - `requester_id` - ID of the student making the request
    ///
    /// # Returns
    /// - `Ok(Notification)` - The notification, now read
    /// - `Err(AppError::NotFound)` - No notification with that ID
    /// - `Err(AppError::AuthErr(Forbidden))` - Addressed to a different student
    pub async fn mark_read(
        &self,
        notification_id: i32,
        requester_id: i32,
    ) -> Result<Notification, AppError> {
        let repo = NotificationRepository::new(self.db);

        let notification = repo.find_by_id(notification_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Notification {} not found", notification_id))
        })?;

        if !notification.is_visible_to(requester_id) {
            return Err(AuthError::Forbidden {
                student_id: requester_id,
                notification_id,
            }
            .into());
        }

        if notification.is_read {
            return Ok(notification);
        }

        Ok(repo.mark_read(notification_id).await?)
    }

    /// Gets a batch with its read progress counted now.
    ///
    /// # Returns
    /// - `Ok(NotificationBatchWithStats)` - Batch and current stats
    /// - `Err(AppError::NotFound)` - No batch with that ID
    pub async fn batch_stats(&self, batch_id: i32) -> Result<NotificationBatchWithStats, AppError> {
        let repo = NotificationBatchRepository::new(self.db);

        let batch = repo
            .find_by_id(batch_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Notification batch {} not found", batch_id)))?;

        let stats = repo.stats(batch.id).await?;

        Ok(NotificationBatchWithStats { batch, stats })
    }

    /// Gets sent batches newest first, each with fresh stats
    pub async fn get_sent(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<NotificationBatchWithStats>, AppError> {
        let repo = NotificationBatchRepository::new(self.db);

        let batches = repo.get_recent(skip, limit).await?;

        let mut sent = Vec::with_capacity(batches.len());
        for batch in batches {
            let stats = repo.stats(batch.id).await?;
            sent.push(NotificationBatchWithStats { batch, stats });
        }

        Ok(sent)
    }

    /// Gets the inbox of a student
    pub async fn get_inbox(&self, params: InboxParams) -> Result<Vec<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db)
            .get_for_student(params)
            .await?)
    }
}
