use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::exam_result::ExamResultFactory};

use crate::server::{
    data::exam_result::ExamResultRepository,
    model::exam_result::{ExamResultFilter, UpsertExamResultParam},
};

mod get_filtered;

fn result(student_id: i32, subject: &str, marks_obtained: f64) -> UpsertExamResultParam {
    UpsertExamResultParam {
        student_id,
        exam_title: "Half Yearly".to_string(),
        exam_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        subject: subject.to_string(),
        marks_obtained,
        total_marks: 100.0,
        grade: "B1".to_string(),
    }
}
