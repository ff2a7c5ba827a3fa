use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Dispatch request.
///
/// `student_id` takes precedence over `grade`/`section`; with none of the three set the
/// notification is global.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateNotificationDto {
    pub title: String,
    pub message: String,
    pub attachment_url: Option<String>,
    pub student_id: Option<i32>,
    pub grade: Option<String>,
    pub section: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NotificationDto {
    pub id: i32,
    /// `null` for global notifications
    pub student_id: Option<i32>,
    pub batch_id: i32,
    pub title: String,
    pub message: String,
    pub attachment_url: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct NotificationBatchDto {
    pub id: i32,
    pub title: String,
    pub message: String,
    pub attachment_url: Option<String>,
    pub target_student_id: Option<i32>,
    pub target_grade: Option<String>,
    pub target_section: Option<String>,
    pub created_at: DateTime<Utc>,
    pub total_count: u64,
    pub read_count: u64,
}

/// Response of a dispatch: the batch and every notification created for it.
///
/// `notifications` is empty when a grade/section filter matched no students.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DispatchedNotificationsDto {
    pub batch: NotificationBatchDto,
    pub notifications: Vec<NotificationDto>,
}
