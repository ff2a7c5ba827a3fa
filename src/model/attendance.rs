use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Attendance mark for a single day.
///
/// Serialized with the labels shown to staff, which are also the values stored in the
/// database (`"Half Day"` rather than `"HalfDay"`).
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
pub enum AttendanceStatus {
    Present,
    Absent,
    #[serde(rename = "Half Day")]
    HalfDay,
    Late,
    Holiday,
    Weekend,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::HalfDay => "Half Day",
            Self::Late => "Late",
            Self::Holiday => "Holiday",
            Self::Weekend => "Weekend",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Present" => Ok(Self::Present),
            "Absent" => Ok(Self::Absent),
            "Half Day" => Ok(Self::HalfDay),
            "Late" => Ok(Self::Late),
            "Holiday" => Ok(Self::Holiday),
            "Weekend" => Ok(Self::Weekend),
            other => Err(format!("unknown attendance status '{}'", other)),
        }
    }
}

/// One entry of an attendance batch submission.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpsertAttendanceDto {
    pub student_id: i32,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub remarks: Option<String>,
    pub class_grade: Option<String>,
    pub section: Option<String>,
    /// Morning, Afternoon or Full Day
    pub absence_type: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AttendanceDto {
    pub id: i32,
    pub student_id: i32,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub remarks: Option<String>,
    pub class_grade: Option<String>,
    pub section: Option<String>,
    pub absence_type: Option<String>,
}
