//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are built from DTOs and carry the validation that must pass before
//! any engine logic runs.

pub mod attendance;
pub mod exam_result;
pub mod notification;
pub mod student;
