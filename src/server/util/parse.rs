use crate::{
    model::attendance::AttendanceStatus,
    server::error::{internal::InternalError, AppError},
};

/// Parses a stored attendance status label
///
/// # Arguments
/// - `record_id` - ID of the attendance record, used in the error
/// - `value` - The stored label, e.g. `"Half Day"`
///
/// # Returns
/// - `Ok(AttendanceStatus)` - Known label
/// - `Err(AppError::InternalErr(InvalidAttendanceStatus))` - Unknown label
pub fn parse_attendance_status(record_id: i32, value: String) -> Result<AttendanceStatus, AppError> {
    let status = value
        .parse::<AttendanceStatus>()
        .map_err(|reason| InternalError::InvalidAttendanceStatus {
            record_id,
            value,
            reason,
        })?;

    Ok(status)
}

/// Treats a blank optional string as absent.
///
/// Audience selectors and filters arrive from forms that send `""` for untouched fields.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
