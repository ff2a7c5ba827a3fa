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
        student::{CreateStudentDto, StudentDto},
    },
    server::{
        controller::default_limit,
        error::AppError,
        model::student::{CreateStudentParams, Student, StudentFilter},
        service::student::StudentService,
        state::AppState,
        util::parse::non_blank,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

#[derive(Deserialize)]
pub struct StudentQuery {
    pub class_grade: Option<String>,
    pub section: Option<String>,
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

/// Create a student.
///
/// # Returns
/// - `201 Created` - The created student
/// - `400 Bad Request` - Blank admission number or name
/// - `409 Conflict` - Admission number already in use
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Successfully created student", body = StudentDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 409, description = "Admission number already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let params = CreateStudentParams::from_dto(payload)?;

    let student = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}

/// List students, optionally narrowed to a grade and section.
///
/// # Returns
/// - `200 OK` - Matching students ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    params(
        ("class_grade" = Option<String>, Query, description = "Only students in this grade"),
        ("section" = Option<String>, Query, description = "Only students in this section"),
        ("skip" = Option<u64>, Query, description = "Number of students to skip (default 0)"),
        ("limit" = Option<u64>, Query, description = "Maximum number of students (default 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(
    State(state): State<AppState>,
    Query(query): Query<StudentQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);

    let students = service
        .get_filtered(StudentFilter {
            class_grade: non_blank(query.class_grade),
            section: non_blank(query.section),
            skip: query.skip,
            limit: query.limit,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            students
                .into_iter()
                .map(Student::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}
