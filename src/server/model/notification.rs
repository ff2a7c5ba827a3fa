//! Notification domain models, dispatch parameters and audience resolution rules.

use chrono::{DateTime, Utc};

use crate::{
    model::notification::{
        CreateNotificationDto, DispatchedNotificationsDto, NotificationBatchDto, NotificationDto,
    },
    server::{error::AppError, util::parse::non_blank},
};

/// Who a dispatch is addressed to.
///
/// Built from the raw selector fields with fixed precedence: an explicit student wins
/// over a grade/section filter, and with no selector at all the dispatch is global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Audience {
    /// Exactly one student.
    Student(i32),
    /// Every student currently matching the set fields. At least one field is `Some`.
    Filter {
        grade: Option<String>,
        section: Option<String>,
    },
    /// Everyone, delivered as a single notification with no recipient.
    Global,
}

impl Audience {
    /// Resolves the selector fields of a dispatch request into an audience.
    ///
    /// Blank grade/section strings count as absent.
    ///
    /// # Arguments
    /// - `student_id` - Explicit recipient
    /// - `grade` - Class grade filter
    /// - `section` - Section filter
    ///
    /// # Returns
    /// - `Audience` - First matching rule of student, filter, global
    pub fn from_selector(
        student_id: Option<i32>,
        grade: Option<String>,
        section: Option<String>,
    ) -> Self {
        match (student_id, non_blank(grade), non_blank(section)) {
            (Some(id), _, _) => Self::Student(id),
            (None, None, None) => Self::Global,
            (None, grade, section) => Self::Filter { grade, section },
        }
    }
}

/// Parameters for dispatching a notification.
#[derive(Debug, Clone)]
pub struct DispatchNotificationParams {
    pub title: String,
    pub message: String,
    pub attachment_url: Option<String>,
    /// Raw selector fields, recorded on the batch for audit.
    pub target_student_id: Option<i32>,
    pub target_grade: Option<String>,
    pub target_section: Option<String>,
}

impl DispatchNotificationParams {
    /// Validates and converts a dispatch request.
    ///
    /// # Returns
    /// - `Ok(DispatchNotificationParams)` - Title and message are present
    /// - `Err(AppError::BadRequest)` - Title or message is blank
    pub fn from_dto(dto: CreateNotificationDto) -> Result<Self, AppError> {
        if dto.title.trim().is_empty() {
            return Err(AppError::BadRequest("title must not be empty".to_string()));
        }
        if dto.message.trim().is_empty() {
            return Err(AppError::BadRequest("message must not be empty".to_string()));
        }

        Ok(Self {
            title: dto.title,
            message: dto.message,
            attachment_url: non_blank(dto.attachment_url),
            target_student_id: dto.student_id,
            target_grade: non_blank(dto.grade),
            target_section: non_blank(dto.section),
        })
    }

    /// Audience this dispatch resolves to.
    pub fn audience(&self) -> Audience {
        Audience::from_selector(
            self.target_student_id,
            self.target_grade.clone(),
            self.target_section.clone(),
        )
    }
}

/// One dispatch action.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationBatch {
    pub id: i32,
    pub title: String,
    pub message: String,
    pub attachment_url: Option<String>,
    pub target_student_id: Option<i32>,
    pub target_grade: Option<String>,
    pub target_section: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NotificationBatch {
    pub fn from_entity(entity: entity::notification_batch::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            message: entity.message,
            attachment_url: entity.attachment_url,
            target_student_id: entity.target_student_id,
            target_grade: entity.target_grade,
            target_section: entity.target_section,
            created_at: entity.created_at,
        }
    }
}

/// Read progress of a batch, counted from its notifications at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    pub total: u64,
    pub read: u64,
}

/// Batch together with freshly counted stats.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationBatchWithStats {
    pub batch: NotificationBatch,
    pub stats: BatchStats,
}

impl NotificationBatchWithStats {
    pub fn into_dto(self) -> NotificationBatchDto {
        NotificationBatchDto {
            id: self.batch.id,
            title: self.batch.title,
            message: self.batch.message,
            attachment_url: self.batch.attachment_url,
            target_student_id: self.batch.target_student_id,
            target_grade: self.batch.target_grade,
            target_section: self.batch.target_section,
            created_at: self.batch.created_at,
            total_count: self.stats.total,
            read_count: self.stats.read,
        }
    }
}

/// A delivered notification. `student_id == None` marks a global notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub student_id: Option<i32>,
    pub batch_id: i32,
    pub title: String,
    pub message: String,
    pub attachment_url: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            student_id: self.student_id,
            batch_id: self.batch_id,
            title: self.title,
            message: self.message,
            attachment_url: self.attachment_url,
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            batch_id: entity.batch_id,
            title: entity.title,
            message: entity.message,
            attachment_url: entity.attachment_url,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }

    /// Whether the given student may read or mark this notification.
    ///
    /// Global notifications are visible to every student.
    pub fn is_visible_to(&self, student_id: i32) -> bool {
        self.student_id.map_or(true, |recipient| recipient == student_id)
    }
}

/// Outcome of a dispatch: the batch and every notification created for it.
///
/// An empty `notifications` list is a valid result of a filter matching nobody.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchedNotifications {
    pub batch: NotificationBatchWithStats,
    pub notifications: Vec<Notification>,
}

impl DispatchedNotifications {
    pub fn into_dto(self) -> DispatchedNotificationsDto {
        DispatchedNotificationsDto {
            batch: self.batch.into_dto(),
            notifications: self
                .notifications
                .into_iter()
                .map(Notification::into_dto)
                .collect(),
        }
    }
}

/// Inbox listing options.
#[derive(Debug, Clone, Copy)]
pub struct InboxParams {
    pub student_id: i32,
    pub skip: u64,
    pub limit: u64,
}
