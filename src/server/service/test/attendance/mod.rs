use chrono::NaiveDate;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::attendance::AttendanceStatus,
    server::{
        error::AppError,
        model::attendance::{AttendanceFilter, UpsertAttendanceParam},
        service::attendance::AttendanceService,
    },
};

mod get_filtered;
mod upsert_batch;

fn mark(student_id: i32, status: AttendanceStatus) -> UpsertAttendanceParam {
    UpsertAttendanceParam {
        student_id,
        date: NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
        status,
        remarks: None,
        class_grade: None,
        section: None,
        absence_type: None,
    }
}
