//! Request and response DTOs shared by the HTTP layer.
//!
//! These types define the JSON wire format. Server-side domain models convert to and
//! from them at the controller boundary.

pub mod api;
pub mod attendance;
pub mod exam_result;
pub mod notification;
pub mod student;
