//! Student factory for creating test student entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db)
///     .name("Asha")
///     .class_grade("5")
///     .section("B")
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    admission_number: String,
    name: String,
    class_grade: Option<String>,
    section: Option<String>,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - admission_number: `"ADM{id}"` where id is auto-incremented
    /// - name: `"Student {id}"`
    /// - class_grade: `Some("1")`
    /// - section: `Some("A")`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `StudentFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            admission_number: format!("ADM{}", id),
            name: format!("Student {}", id),
            class_grade: Some("1".to_string()),
            section: Some("A".to_string()),
        }
    }

    /// Sets the admission number.
    pub fn admission_number(mut self, admission_number: impl Into<String>) -> Self {
        self.admission_number = admission_number.into();
        self
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the class grade.
    pub fn class_grade(mut self, class_grade: impl Into<String>) -> Self {
        self.class_grade = Some(class_grade.into());
        self
    }

    /// Sets the section.
    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Clears grade and section, leaving a student with no class placement.
    pub fn unplaced(mut self) -> Self {
        self.class_grade = None;
        self.section = None;
        self
    }

    /// Builds and inserts the student entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        entity::student::ActiveModel {
            id: ActiveValue::NotSet,
            admission_number: ActiveValue::Set(self.admission_number),
            name: ActiveValue::Set(self.name),
            class_grade: ActiveValue::Set(self.class_grade),
            section: ActiveValue::Set(self.section),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a student with default values.
///
/// Shorthand for `StudentFactory::new(db).build().await`.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}

/// Creates a student placed in the given grade and section.
///
/// # Arguments
/// - `db` - Database connection
/// - `class_grade` - Grade to place the student in
/// - `section` - Section to place the student in
///
/// # Returns
/// - `Ok(entity::student::Model)` - Created student entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_student_in(
    db: &DatabaseConnection,
    class_grade: &str,
    section: &str,
) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db)
        .class_grade(class_grade)
        .section(section)
        .build()
        .await
}
