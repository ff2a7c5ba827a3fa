//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let student = factory::create_student(&db).await?;
//! let record = factory::create_attendance(&db, student.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use test_utils::factory::student::StudentFactory;
//!
//! let student = StudentFactory::new(&db)
//!     .class_grade("5")
//!     .section("A")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `student` - Create student entities
//! - `attendance` - Create attendance records
//! - `exam_result` - Create exam result records
//! - `notification_batch` - Create notification batches
//! - `notification` - Create notifications belonging to a batch
//! - `helpers` - Unique id generation and multi-entity shortcuts

pub mod attendance;
pub mod exam_result;
pub mod helpers;
pub mod notification;
pub mod notification_batch;
pub mod student;

// Re-export commonly used factory functions for concise usage
pub use attendance::create_attendance;
pub use exam_result::create_exam_result;
pub use notification::create_notification;
pub use notification_batch::create_notification_batch;
pub use student::{create_student, create_student_in};
