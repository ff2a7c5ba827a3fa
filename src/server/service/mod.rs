//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Referential checks and audience resolution
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Each batch write or dispatch runs in one transaction

pub mod attendance;
pub mod exam_result;
pub mod notification;
pub mod student;

#[cfg(test)]
mod test;
