//! Exam result domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::exam_result::{ExamResultDto, UpsertExamResultDto},
    server::error::AppError,
};

/// Persisted marks for one subject of one exam.
#[derive(Debug, Clone, PartialEq)]
pub struct ExamResult {
    pub id: i32,
    pub student_id: i32,
    pub exam_title: String,
    pub exam_date: NaiveDate,
    pub subject: String,
    pub marks_obtained: f64,
    pub total_marks: f64,
    pub grade: String,
}

impl ExamResult {
    pub fn into_dto(self) -> ExamResultDto {
        ExamResultDto {
            id: self.id,
            student_id: self.student_id,
            exam_title: self.exam_title,
            exam_date: self.exam_date,
            subject: self.subject,
            marks_obtained: self.marks_obtained,
            total_marks: self.total_marks,
            grade: self.grade,
        }
    }

    pub fn from_entity(entity: entity::exam_result::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            exam_title: entity.exam_title,
            exam_date: entity.exam_date,
            subject: entity.subject,
            marks_obtained: entity.marks_obtained,
            total_marks: entity.total_marks,
            grade: entity.grade,
        }
    }
}

/// One exam result fact to apply. `(student_id, exam_title, subject)` is its natural key.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertExamResultParam {
    pub student_id: i32,
    pub exam_title: String,
    pub exam_date: NaiveDate,
    pub subject: String,
    pub marks_obtained: f64,
    pub total_marks: f64,
    pub grade: String,
}

impl UpsertExamResultParam {
    /// Validates and converts one entry of a batch submission.
    ///
    /// Key strings are trimmed so `"Maths "` and `"Maths"` address the same record.
    ///
    /// # Arguments
    /// - `index` - Position of the entry in the submitted batch, used in error messages
    /// - `dto` - The submitted entry
    ///
    /// # Returns
    /// - `Ok(UpsertExamResultParam)` - Entry is well formed
    /// - `Err(AppError::BadRequest)` - Blank key field or grade, or marks out of range
    pub fn from_dto(index: usize, dto: UpsertExamResultDto) -> Result<Self, AppError> {
        let invalid = |reason: &str| AppError::BadRequest(format!("results[{}]: {}", index, reason));

        let exam_title = dto.exam_title.trim().to_string();
        let subject = dto.subject.trim().to_string();
        let grade = dto.grade.trim().to_string();

        if exam_title.is_empty() {
            return Err(invalid("exam_title must not be empty"));
        }
        if subject.is_empty() {
            return Err(invalid("subject must not be empty"));
        }
        if grade.is_empty() {
            return Err(invalid("grade must not be empty"));
        }
        if !dto.total_marks.is_finite() || dto.total_marks <= 0.0 {
            return Err(invalid("total_marks must be greater than zero"));
        }
        if !dto.marks_obtained.is_finite() || dto.marks_obtained < 0.0 {
            return Err(invalid("marks_obtained must not be negative"));
        }
        if dto.marks_obtained > dto.total_marks {
            return Err(invalid("marks_obtained must not exceed total_marks"));
        }

        Ok(Self {
            student_id: dto.student_id,
            exam_title,
            exam_date: dto.exam_date,
            subject,
            marks_obtained: dto.marks_obtained,
            total_marks: dto.total_marks,
            grade,
        })
    }
}

/// Filters for exam result listings.
#[derive(Debug, Clone, Default)]
pub struct ExamResultFilter {
    pub student_id: Option<i32>,
    pub exam_title: Option<String>,
    pub subject: Option<String>,
    pub skip: u64,
    pub limit: u64,
}
