//! HTTP request handlers.
//!
//! Each handler resolves the requester where needed, converts DTOs into validated
//! parameters, calls one service operation and converts the result back into a DTO.
//! Every handler carries a `#[utoipa::path]` so the router can assemble the OpenAPI
//! document from the same functions it routes to.

pub mod attendance;
pub mod exam_result;
pub mod notification;
pub mod student;

use serde::Deserialize;

/// Default page size for list endpoints.
pub const DEFAULT_LIMIT: u64 = 100;

pub(crate) fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

/// Skip/limit pagination shared by list endpoints.
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct ListParams {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}
