use chrono::NaiveDate;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError, model::exam_result::UpsertExamResultParam,
    service::exam_result::ExamResultService,
};

mod upsert_batch;

fn result(student_id: i32, subject: &str) -> UpsertExamResultParam {
    UpsertExamResultParam {
        student_id,
        exam_title: "Periodic Test 2".to_string(),
        exam_date: NaiveDate::from_ymd_opt(2026, 4, 14).unwrap(),
        subject: subject.to_string(),
        marks_obtained: 18.0,
        total_marks: 25.0,
        grade: "B2".to_string(),
    }
}
