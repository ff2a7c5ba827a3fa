use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One entry of an exam result batch submission.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpsertExamResultDto {
    pub student_id: i32,
    /// e.g. "Periodic Test 1"
    pub exam_title: String,
    pub exam_date: NaiveDate,
    pub subject: String,
    pub marks_obtained: f64,
    pub total_marks: f64,
    /// e.g. "A1", "B2"
    pub grade: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ExamResultDto {
    pub id: i32,
    pub student_id: i32,
    pub exam_title: String,
    pub exam_date: NaiveDate,
    pub subject: String,
    pub marks_obtained: f64,
    pub total_marks: f64,
    pub grade: String,
}
