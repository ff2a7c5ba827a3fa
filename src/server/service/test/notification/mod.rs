use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel, PaginatorTrait};
use test_utils::{
    builder::TestBuilder,
    factory,
    factory::{helpers::create_batch_with_notifications, notification::NotificationFactory},
};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::notification::{BatchStats, DispatchNotificationParams},
    service::notification::NotificationService,
};

mod get_sent;
mod mark_read;

fn params(
    student_id: Option<i32>,
    grade: Option<&str>,
    section: Option<&str>,
) -> DispatchNotificationParams {
    DispatchNotificationParams {
        title: "Sports Day".to_string(),
        message: "Report at 8am in house colours.".to_string(),
        attachment_url: Some("/uploads/sports-day.pdf".to_string()),
        target_student_id: student_id,
        target_grade: grade.map(str::to_string),
        target_section: section.map(str::to_string),
    }
}
