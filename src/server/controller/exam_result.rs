use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        exam_result::{ExamResultDto, UpsertExamResultDto},
    },
    server::{
        controller::default_limit,
        error::AppError,
        model::exam_result::{ExamResult, ExamResultFilter, UpsertExamResultParam},
        service::exam_result::ExamResultService,
        state::AppState,
        util::parse::non_blank,
    },
};

/// Tag for grouping exam result endpoints in OpenAPI documentation
pub static RESULTS_TAG: &str = "results";

#[derive(Deserialize)]
pub struct ExamResultQuery {
    pub student_id: Option<i32>,
    pub exam_title: Option<String>,
    pub subject: Option<String>,
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

/// Submit a batch of exam results.
///
/// Each entry is stored under its `(student_id, exam_title, subject)` key, overwriting
/// an existing result for the same subject of the same exam. Entries are validated before
/// anything is written.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Result entries in submission order
///
/// # Returns
/// - `200 OK` - Stored result for every entry, in submission order
/// - `400 Bad Request` - An entry has a blank field or marks out of range
/// - `404 Not Found` - An entry references a student that does not exist
/// - `409 Conflict` - Another request created one of the keys at the same time
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/results/batch",
    tag = RESULTS_TAG,
    request_body = Vec<UpsertExamResultDto>,
    responses(
        (status = 200, description = "Successfully applied result batch", body = Vec<ExamResultDto>),
        (status = 400, description = "Invalid result entry", body = ErrorDto),
        (status = 404, description = "Referenced student not found", body = ErrorDto),
        (status = 409, description = "Concurrent write to the same result key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_result_batch(
    State(state): State<AppState>,
    Json(payload): Json<Vec<UpsertExamResultDto>>,
) -> Result<impl IntoResponse, AppError> {
    let service = ExamResultService::new(&state.db);

    let params = payload
        .into_iter()
        .enumerate()
        .map(|(index, dto)| UpsertExamResultParam::from_dto(index, dto))
        .collect::<Result<Vec<_>, _>>()?;

    let results = service.upsert_batch(params).await?;

    Ok((
        StatusCode::OK,
        Json(
            results
                .into_iter()
                .map(ExamResult::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// List exam results.
///
/// # Returns
/// - `200 OK` - Matching results, most recent exam first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/results",
    tag = RESULTS_TAG,
    params(
        ("student_id" = Option<i32>, Query, description = "Only results of this student"),
        ("exam_title" = Option<String>, Query, description = "Only results of this exam"),
        ("subject" = Option<String>, Query, description = "Only results for this subject"),
        ("skip" = Option<u64>, Query, description = "Number of results to skip (default 0)"),
        ("limit" = Option<u64>, Query, description = "Maximum number of results (default 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved results", body = Vec<ExamResultDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_results(
    State(state): State<AppState>,
    Query(query): Query<ExamResultQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ExamResultService::new(&state.db);

    let results = service
        .get_filtered(ExamResultFilter {
            student_id: query.student_id,
            exam_title: non_blank(query.exam_title),
            subject: non_blank(query.subject),
            skip: query.skip,
            limit: query.limit,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            results
                .into_iter()
                .map(ExamResult::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}
