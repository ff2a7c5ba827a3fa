//! Attendance domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::attendance::{AttendanceDto, AttendanceStatus, UpsertAttendanceDto},
    server::{error::AppError, util::parse::parse_attendance_status},
};

/// Persisted attendance record.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRecord {
    pub id: i32,
    pub student_id: i32,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub remarks: Option<String>,
    pub class_grade: Option<String>,
    pub section: Option<String>,
    pub absence_type: Option<String>,
}

impl AttendanceRecord {
    /// Converts the attendance domain model to a DTO for API responses.
    pub fn into_dto(self) -> AttendanceDto {
        AttendanceDto {
            id: self.id,
            student_id: self.student_id,
            date: self.date,
            status: self.status,
            remarks: self.remarks,
            class_grade: self.class_grade,
            section: self.section,
            absence_type: self.absence_type,
        }
    }

    /// Converts an entity model to an attendance domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(AttendanceRecord)` - The converted record
    /// - `Err(AppError::InternalErr(InvalidAttendanceStatus))` - Stored status label is unknown
    pub fn from_entity(entity: entity::attendance::Model) -> Result<Self, AppError> {
        let status = parse_attendance_status(entity.id, entity.status)?;

        Ok(Self {
            id: entity.id,
            student_id: entity.student_id,
            date: entity.date,
            status,
            remarks: entity.remarks,
            class_grade: entity.class_grade,
            section: entity.section,
            absence_type: entity.absence_type,
        })
    }
}

/// One attendance fact to apply. `(student_id, date)` is its natural key.
///
/// Applying it replaces every field of an existing record with the same key, so
/// optional fields left `None` clear what was stored before.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertAttendanceParam {
    pub student_id: i32,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub remarks: Option<String>,
    pub class_grade: Option<String>,
    pub section: Option<String>,
    pub absence_type: Option<String>,
}

impl UpsertAttendanceParam {
    pub fn from_dto(dto: UpsertAttendanceDto) -> Self {
        Self {
            student_id: dto.student_id,
            date: dto.date,
            status: dto.status,
            remarks: dto.remarks,
            class_grade: dto.class_grade,
            section: dto.section,
            absence_type: dto.absence_type,
        }
    }
}

/// Filters for attendance listings. Every set field narrows the result.
#[derive(Debug, Clone, Default)]
pub struct AttendanceFilter {
    pub student_id: Option<i32>,
    pub class_grade: Option<String>,
    pub section: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub skip: u64,
    pub limit: u64,
}

impl AttendanceFilter {
    /// Rejects an inverted date range.
    pub fn validate(self) -> Result<Self, AppError> {
        if let (Some(from), Some(to)) = (self.date_from, self.date_to) {
            if from > to {
                return Err(AppError::BadRequest(format!(
                    "date_from {} is after date_to {}",
                    from, to
                )));
            }
        }

        Ok(self)
    }
}
