//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories are generic over `ConnectionTrait` so the same
//! code runs against the pool or inside a transaction opened by a service. Attendance and
//! exam result writes go through the shared natural-key upsert in `upsert`.

pub mod attendance;
pub mod exam_result;
pub mod notification;
pub mod student;
pub mod upsert;

#[cfg(test)]
mod test;
