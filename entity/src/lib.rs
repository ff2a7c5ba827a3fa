//! SeaORM entity models for the school records database.
//!
//! One module per table. The `prelude` re-exports every `Entity` under its table's
//! singular name so callers can write `entity::prelude::Student::find()`.

pub mod attendance;
pub mod exam_result;
pub mod notification;
pub mod notification_batch;
pub mod prelude;
pub mod student;
