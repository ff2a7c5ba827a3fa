use axum::http::{HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, StudentIdentity, STUDENT_ID_HEADER},
};
use test_utils::{builder::TestBuilder, factory};

mod require_student;
