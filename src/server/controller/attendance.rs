use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        attendance::{AttendanceDto, UpsertAttendanceDto},
    },
    server::{
        controller::default_limit,
        error::AppError,
        model::attendance::{AttendanceFilter, AttendanceRecord, UpsertAttendanceParam},
        service::attendance::AttendanceService,
        state::AppState,
        util::parse::non_blank,
    },
};

/// Tag for grouping attendance endpoints in OpenAPI documentation
pub static ATTENDANCE_TAG: &str = "attendance";

#[derive(Deserialize)]
pub struct AttendanceQuery {
    pub student_id: Option<i32>,
    pub class_grade: Option<String>,
    pub section: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

/// Submit a batch of attendance records.
///
/// Each entry is stored under its `(student_id, date)` key: an existing record for that
/// key is overwritten in full, otherwise a new one is created. Entries are applied in
/// order, so when a key repeats within the batch the last entry wins. The batch is
/// applied in one transaction.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Attendance entries in submission order
///
/// # Returns
/// - `200 OK` - Stored record for every entry, in submission order
/// - `404 Not Found` - An entry references a student that does not exist
/// - `409 Conflict` - Another request created one of the keys at the same time
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/attendance/batch",
    tag = ATTENDANCE_TAG,
    request_body = Vec<UpsertAttendanceDto>,
    responses(
        (status = 200, description = "Successfully applied attendance batch", body = Vec<AttendanceDto>),
        (status = 404, description = "Referenced student not found", body = ErrorDto),
        (status = 409, description = "Concurrent write to the same attendance key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_attendance_batch(
    State(state): State<AppState>,
    Json(payload): Json<Vec<UpsertAttendanceDto>>,
) -> Result<impl IntoResponse, AppError> {
    let service = AttendanceService::new(&state.db);

    let params = payload
        .into_iter()
        .map(UpsertAttendanceParam::from_dto)
        .collect();

    let records = service.upsert_batch(params).await?;

    Ok((
        StatusCode::OK,
        Json(
            records
                .into_iter()
                .map(AttendanceRecord::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// List attendance records.
///
/// Every provided filter narrows the result. Ordered by date, newest first.
///
/// # Returns
/// - `200 OK` - Matching attendance records
/// - `400 Bad Request` - `date_from` is after `date_to`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/attendance",
    tag = ATTENDANCE_TAG,
    params(
        ("student_id" = Option<i32>, Query, description = "Only records of this student"),
        ("class_grade" = Option<String>, Query, description = "Only records taken in this grade"),
        ("section" = Option<String>, Query, description = "Only records taken in this section"),
        ("date_from" = Option<NaiveDate>, Query, description = "Earliest date, inclusive"),
        ("date_to" = Option<NaiveDate>, Query, description = "Latest date, inclusive"),
        ("skip" = Option<u64>, Query, description = "Number of records to skip (default 0)"),
        ("limit" = Option<u64>, Query, description = "Maximum number of records (default 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved attendance records", body = Vec<AttendanceDto>),
        (status = 400, description = "Invalid date range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_attendance(
    State(state): State<AppState>,
    Query(query): Query<AttendanceQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = AttendanceService::new(&state.db);

    let records = service
        .get_filtered(AttendanceFilter {
            student_id: query.student_id,
            class_grade: non_blank(query.class_grade),
            section: non_blank(query.section),
            date_from: query.date_from,
            date_to: query.date_to,
            skip: query.skip,
            limit: query.limit,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            records
                .into_iter()
                .map(AttendanceRecord::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}
