use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Student, Attendance};
///
/// let test = TestBuilder::new()
///     .with_table(Student)
///     .with_table(Attendance)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,

    /// CREATE INDEX statements executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index to create once all tables exist.
    ///
    /// Entity definitions cannot express composite unique keys, so natural-key
    /// constraints are added here the same way the migrations add them.
    ///
    /// # Arguments
    /// - `index` - CREATE INDEX statement
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the student table.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_student_tables(self) -> Self {
        self.with_table(Student)
    }

    /// Adds the tables required for attendance operations.
    ///
    /// Adds Student and Attendance plus the unique `(student_id, date)` index.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_attendance_tables(self) -> Self {
        self.with_student_tables().with_table(Attendance).with_index(
            Index::create()
                .name("idx_attendance_student_date")
                .table(Attendance)
                .col(entity::attendance::Column::StudentId)
                .col(entity::attendance::Column::Date)
                .unique()
                .to_owned(),
        )
    }

    /// Adds the tables required for exam result operations.
    ///
    /// Adds Student and ExamResult plus the unique `(student_id, exam_title, subject)`
    /// index.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_exam_result_tables(self) -> Self {
        self.with_student_tables().with_table(ExamResult).with_index(
            Index::create()
                .name("idx_exam_result_student_exam_subject")
                .table(ExamResult)
                .col(entity::exam_result::Column::StudentId)
                .col(entity::exam_result::Column::ExamTitle)
                .col(entity::exam_result::Column::Subject)
                .unique()
                .to_owned(),
        )
    }

    /// Adds the tables required for notification operations.
    ///
    /// Adds Student, NotificationBatch and Notification in dependency order.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_notification_tables(self) -> Self {
        self.with_student_tables()
            .with_table(NotificationBatch)
            .with_table(Notification)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection, executes all CREATE TABLE
    /// statements, then all CREATE INDEX statements.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
