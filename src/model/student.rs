use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateStudentDto {
    pub admission_number: String,
    pub name: String,
    pub class_grade: Option<String>,
    pub section: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct StudentDto {
    pub id: i32,
    pub admission_number: String,
    pub name: String,
    pub class_grade: Option<String>,
    pub section: Option<String>,
    pub created_at: DateTime<Utc>,
}
