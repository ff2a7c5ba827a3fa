//! Student domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::student::{CreateStudentDto, StudentDto},
    server::{error::AppError, util::parse::non_blank},
};

/// Student profile with the class placement used for audience resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub admission_number: String,
    pub name: String,
    pub class_grade: Option<String>,
    pub section: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// Converts the student domain model to a DTO for API responses.
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            admission_number: self.admission_number,
            name: self.name,
            class_grade: self.class_grade,
            section: self.section,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a student domain model at the repository boundary.
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            admission_number: entity.admission_number,
            name: entity.name,
            class_grade: entity.class_grade,
            section: entity.section,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a student.
#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub admission_number: String,
    pub name: String,
    pub class_grade: Option<String>,
    pub section: Option<String>,
}

impl CreateStudentParams {
    /// Validates and converts a create request.
    ///
    /// # Returns
    /// - `Ok(CreateStudentParams)` - Trimmed, non-empty admission number and name
    /// - `Err(AppError::BadRequest)` - Admission number or name is blank
    pub fn from_dto(dto: CreateStudentDto) -> Result<Self, AppError> {
        let admission_number = dto.admission_number.trim().to_string();
        let name = dto.name.trim().to_string();

        if admission_number.is_empty() {
            return Err(AppError::BadRequest(
                "admission_number must not be empty".to_string(),
            ));
        }
        if name.is_empty() {
            return Err(AppError::BadRequest("name must not be empty".to_string()));
        }

        Ok(Self {
            admission_number,
            name,
            class_grade: non_blank(dto.class_grade),
            section: non_blank(dto.section),
        })
    }
}

/// Grade/section filter for student listings.
#[derive(Debug, Clone, Default)]
pub struct StudentFilter {
    pub class_grade: Option<String>,
    pub section: Option<String>,
    pub skip: u64,
    pub limit: u64,
}
