use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{attendance, exam_result, notification, student},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "School Records API",
        description = "Attendance and exam result batch entry, and notification dispatch to students."
    ),
    tags(
        (name = "attendance", description = "Daily attendance records"),
        (name = "results", description = "Exam results"),
        (name = "notification", description = "Notification dispatch, inbox and read tracking"),
        (name = "student", description = "Student profiles used for audiences")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = api_router().split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
}

/// API routes with their OpenAPI operations, before Swagger UI is mounted
fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(attendance::upsert_attendance_batch))
        .routes(routes!(attendance::get_attendance))
        .routes(routes!(exam_result::upsert_result_batch))
        .routes(routes!(exam_result::get_results))
        .routes(routes!(
            notification::dispatch_notification,
            notification::get_inbox
        ))
        .routes(routes!(notification::mark_notification_read))
        .routes(routes!(notification::get_sent_notifications))
        .routes(routes!(notification::get_sent_notification))
        .routes(routes!(student::create_student, student::get_students))
}
