//! Requester identity and access guard.
//!
//! The caller names the acting student in the `X-Student-Id` header. [`StudentIdentity`]
//! extracts and parses that header; [`AuthGuard`] confirms the student exists before a
//! handler acts on their behalf.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::student::StudentRepository,
    error::{auth::AuthError, AppError},
    model::student::Student,
};

/// Header carrying the ID of the student making the request.
pub const STUDENT_ID_HEADER: &str = "x-student-id";

/// Student ID claimed by the request, not yet checked against the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentIdentity(pub i32);

impl StudentIdentity {
    /// Reads the requester identity from request headers.
    ///
    /// # Arguments
    /// - `headers` - Request headers
    ///
    /// # Returns
    /// - `Ok(StudentIdentity)` - Header present and an integer ID
    /// - `Err(AuthError::MissingIdentity)` - Header absent
    /// - `Err(AuthError::InvalidIdentity)` - Header not valid text or not an integer
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, AppError> {
        let Some(value) = headers.get(STUDENT_ID_HEADER) else {
            return Err(AuthError::MissingIdentity.into());
        };

        let raw = value.to_str().map_err(|_| {
            AuthError::InvalidIdentity(String::from_utf8_lossy(value.as_bytes()).into_owned())
        })?;

        let student_id = raw
            .trim()
            .parse::<i32>()
            .map_err(|_| AuthError::InvalidIdentity(raw.to_string()))?;

        Ok(Self(student_id))
    }
}

impl<S> FromRequestParts<S> for StudentIdentity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_headers(&parts.headers)
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    identity: &'a StudentIdentity,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, identity: &'a StudentIdentity) -> Self {
        Self { db, identity }
    }

    /// Resolves the requester to an existing student.
    ///
    /// # Returns
    /// - `Ok(Student)` - The requesting student
    /// - `Err(AuthError::UnknownStudent)` - No student with the claimed ID
    pub async fn require_student(&self) -> Result<Student, AppError> {
        let student_id = self.identity.0;

        let Some(student) = StudentRepository::new(self.db)
            .find_by_id(student_id)
            .await?
        else {
            return Err(AuthError::UnknownStudent(student_id).into());
        };

        Ok(student)
    }
}
