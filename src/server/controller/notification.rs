use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        notification::{
            CreateNotificationDto, DispatchedNotificationsDto, NotificationBatchDto,
            NotificationDto,
        },
    },
    server::{
        controller::ListParams,
        error::AppError,
        middleware::auth::{AuthGuard, StudentIdentity},
        model::notification::{
            DispatchNotificationParams, InboxParams, Notification, NotificationBatchWithStats,
        },
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// Dispatch a notification.
///
/// Resolves the audience from the selector fields, first match wins:
/// 1. `student_id` set: that student only
/// 2. `grade` and/or `section` set: every student currently in that class
/// 3. nothing set: a single global notification visible to every student
///
/// Blank `grade`/`section` values count as unset. A class filter matching no students
/// still records the batch and returns it with an empty notification list.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Notification content and audience selector
///
/// # Returns
/// - `201 Created` - The batch and every created notification
/// - `400 Bad Request` - Blank title or message
/// - `404 Not Found` - `student_id` names a student that does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    request_body = CreateNotificationDto,
    responses(
        (status = 201, description = "Successfully dispatched notification", body = DispatchedNotificationsDto),
        (status = 400, description = "Invalid notification data", body = ErrorDto),
        (status = 404, description = "Recipient student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn dispatch_notification(
    State(state): State<AppState>,
    Json(payload): Json<CreateNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = NotificationService::new(&state.db);

    let params = DispatchNotificationParams::from_dto(payload)?;

    let dispatched = service.dispatch(params).await?;

    Ok((StatusCode::CREATED, Json(dispatched.into_dto())))
}

/// Get the requester's inbox.
///
/// Returns the requesting student's own notifications plus all global ones, unread first
/// and newest first within each group.
///
/// # Access Control
/// - `X-Student-Id` - Must name an existing student
///
/// # Returns
/// - `200 OK` - Notifications visible to the student
/// - `401 Unauthorized` - Missing, malformed or unknown student identity
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    params(
        ("x-student-id" = i32, Header, description = "ID of the requesting student"),
        ("skip" = Option<u64>, Query, description = "Number of notifications to skip (default 0)"),
        ("limit" = Option<u64>, Query, description = "Maximum number of notifications (default 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved notifications", body = Vec<NotificationDto>),
        (status = 401, description = "Missing or unknown student identity", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inbox(
    State(state): State<AppState>,
    identity: StudentIdentity,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &identity)
        .require_student()
        .await?;

    let service = NotificationService::new(&state.db);

    let notifications = service
        .get_inbox(InboxParams {
            student_id: student.id,
            skip: params.skip,
            limit: params.limit,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            notifications
                .into_iter()
                .map(Notification::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Mark a notification as read.
///
/// Global notifications can be marked by any student. Marking an already read
/// notification succeeds without change.
///
/// # Access Control
/// - `X-Student-Id` - Must name an existing student who is the recipient, unless the
///   notification is global
///
/// # Returns
/// - `200 OK` - The notification, now read
/// - `401 Unauthorized` - Missing, malformed or unknown student identity
/// - `403 Forbidden` - Notification is addressed to another student
/// - `404 Not Found` - Notification does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/notifications/{notification_id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("notification_id" = i32, Path, description = "Notification ID"),
        ("x-student-id" = i32, Header, description = "ID of the requesting student")
    ),
    responses(
        (status = 200, description = "Successfully marked notification read", body = NotificationDto),
        (status = 401, description = "Missing or unknown student identity", body = ErrorDto),
        (status = 403, description = "Notification belongs to another student", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    identity: StudentIdentity,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &identity)
        .require_student()
        .await?;

    let service = NotificationService::new(&state.db);

    let notification = service.mark_read(notification_id, student.id).await?;

    Ok((StatusCode::OK, Json(notification.into_dto())))
}

/// List sent notification batches.
///
/// Newest first. Read counts are computed at request time.
///
/// # Returns
/// - `200 OK` - Batches with `total_count` and `read_count`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/notifications/sent",
    tag = NOTIFICATION_TAG,
    params(
        ("skip" = Option<u64>, Query, description = "Number of batches to skip (default 0)"),
        ("limit" = Option<u64>, Query, description = "Maximum number of batches (default 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved sent batches", body = Vec<NotificationBatchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sent_notifications(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = NotificationService::new(&state.db);

    let batches = service.get_sent(params.skip, params.limit).await?;

    Ok((
        StatusCode::OK,
        Json(
            batches
                .into_iter()
                .map(NotificationBatchWithStats::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get one sent batch with its current read counts.
///
/// # Returns
/// - `200 OK` - The batch with `total_count` and `read_count`
/// - `404 Not Found` - Batch does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/notifications/sent/{batch_id}",
    tag = NOTIFICATION_TAG,
    params(
        ("batch_id" = i32, Path, description = "Notification batch ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved batch", body = NotificationBatchDto),
        (status = 404, description = "Batch not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sent_notification(
    State(state): State<AppState>,
    Path(batch_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = NotificationService::new(&state.db);

    let batch = service.batch_stats(batch_id).await?;

    Ok((StatusCode::OK, Json(batch.into_dto())))
}
