//! Attendance factory for creating test attendance records.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating attendance records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::attendance::AttendanceFactory;
///
/// let record = AttendanceFactory::new(&db, student.id)
///     .status("Absent")
///     .remarks("Fever")
///     .build()
///     .await?;
/// ```
pub struct AttendanceFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    date: NaiveDate,
    status: String,
    remarks: Option<String>,
    class_grade: Option<String>,
    section: Option<String>,
    absence_type: Option<String>,
}

impl<'a> AttendanceFactory<'a> {
    /// Creates a new AttendanceFactory with default values.
    ///
    /// Defaults:
    /// - date: 2026-01-05
    /// - status: `"Present"`
    /// - all optional columns: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `student_id` - ID of the student the record belongs to
    pub fn new(db: &'a DatabaseConnection, student_id: i32) -> Self {
        Self {
            db,
            student_id,
            date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap_or_default(),
            status: "Present".to_string(),
            remarks: None,
            class_grade: None,
            section: None,
            absence_type: None,
        }
    }

    /// Sets the attendance date.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the stored status string.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the remarks.
    pub fn remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    /// Sets the class and section snapshot.
    pub fn class(mut self, class_grade: impl Into<String>, section: impl Into<String>) -> Self {
        self.class_grade = Some(class_grade.into());
        self.section = Some(section.into());
        self
    }

    /// Sets the absence type tag.
    pub fn absence_type(mut self, absence_type: impl Into<String>) -> Self {
        self.absence_type = Some(absence_type.into());
        self
    }

    /// Builds and inserts the attendance record.
    ///
    /// # Returns
    /// - `Ok(entity::attendance::Model)` - Created attendance record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::attendance::Model, DbErr> {
        entity::attendance::ActiveModel {
            id: ActiveValue::NotSet,
            student_id: ActiveValue::Set(self.student_id),
            date: ActiveValue::Set(self.date),
            status: ActiveValue::Set(self.status),
            remarks: ActiveValue::Set(self.remarks),
            class_grade: ActiveValue::Set(self.class_grade),
            section: ActiveValue::Set(self.section),
            absence_type: ActiveValue::Set(self.absence_type),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a "Present" attendance record on the default date.
pub async fn create_attendance(
    db: &DatabaseConnection,
    student_id: i32,
) -> Result<entity::attendance::Model, DbErr> {
    AttendanceFactory::new(db, student_id).build().await
}
