//! Exam result factory for creating test exam result records.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating exam result records with customizable fields.
pub struct ExamResultFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    exam_title: String,
    exam_date: NaiveDate,
    subject: String,
    marks_obtained: f64,
    total_marks: f64,
    grade: String,
}

impl<'a> ExamResultFactory<'a> {
    /// Creates a new ExamResultFactory with default values.
    ///
    /// Defaults:
    /// - exam_title: `"Periodic Test 1"`
    /// - exam_date: 2026-02-10
    /// - subject: `"Mathematics"`
    /// - marks: 42 of 50, grade `"A2"`
    pub fn new(db: &'a DatabaseConnection, student_id: i32) -> Self {
        Self {
            db,
            student_id,
            exam_title: "Periodic Test 1".to_string(),
            exam_date: NaiveDate::from_ymd_opt(2026, 2, 10).unwrap_or_default(),
            subject: "Mathematics".to_string(),
            marks_obtained: 42.0,
            total_marks: 50.0,
            grade: "A2".to_string(),
        }
    }

    /// Sets the exam title.
    pub fn exam_title(mut self, exam_title: impl Into<String>) -> Self {
        self.exam_title = exam_title.into();
        self
    }

    /// Sets the subject.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Sets obtained and total marks.
    pub fn marks(mut self, marks_obtained: f64, total_marks: f64) -> Self {
        self.marks_obtained = marks_obtained;
        self.total_marks = total_marks;
        self
    }

    /// Sets the letter grade.
    pub fn grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = grade.into();
        self
    }

    /// Builds and inserts the exam result record.
    ///
    /// # Returns
    /// - `Ok(entity::exam_result::Model)` - Created exam result
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::exam_result::Model, DbErr> {
        entity::exam_result::ActiveModel {
            id: ActiveValue::NotSet,
            student_id: ActiveValue::Set(self.student_id),
            exam_title: ActiveValue::Set(self.exam_title),
            exam_date: ActiveValue::Set(self.exam_date),
            subject: ActiveValue::Set(self.subject),
            marks_obtained: ActiveValue::Set(self.marks_obtained),
            total_marks: ActiveValue::Set(self.total_marks),
            grade: ActiveValue::Set(self.grade),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an exam result with default values.
pub async fn create_exam_result(
    db: &DatabaseConnection,
    student_id: i32,
) -> Result<entity::exam_result::Model, DbErr> {
    ExamResultFactory::new(db, student_id).build().await
}
