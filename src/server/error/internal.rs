use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored attendance status is not one of the known labels.
    ///
    /// Only reachable if a row was written outside the application. Results in a
    /// 500 Internal Server Error with a generic message returned to client.
    #[error("Failed to parse attendance status '{value}' of record {record_id}: {reason}")]
    InvalidAttendanceStatus {
        /// ID of the attendance record carrying the bad value
        record_id: i32,
        /// The stored value that failed to parse
        value: String,
        /// Parse failure description
        reason: String,
    },
}
