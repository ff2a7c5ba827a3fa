use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carried no `X-Student-Id` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing the requester identity header")]
    MissingIdentity,

    /// The `X-Student-Id` header was present but not a valid student ID.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Requester identity header '{0}' is not a valid student ID")]
    InvalidIdentity(String),

    /// The requester identity names a student that does not exist.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Student {0} named by the requester identity does not exist")]
    UnknownStudent(i32),

    /// The requester tried to act on a notification addressed to another student.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Student {student_id} is not the recipient of notification {notification_id}")]
    Forbidden {
        student_id: i32,
        notification_id: i32,
    },
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - Missing, malformed or unknown requester identity
/// - 403 Forbidden - Notification belongs to a different student
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingIdentity | Self::InvalidIdentity(_) | Self::UnknownStudent(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "A valid student identity is required.".to_string(),
                }),
            )
                .into_response(),
            Self::Forbidden { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Not authorized to access this notification".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
