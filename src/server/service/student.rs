use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::student::StudentRepository,
    error::AppError,
    model::student::{CreateStudentParams, Student, StudentFilter},
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a student; a duplicate admission number surfaces as a conflict
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, AppError> {
        let student = StudentRepository::new(self.db).create(params).await?;

        tracing::info!(
            "Created student {} ({})",
            student.id,
            student.admission_number
        );

        Ok(student)
    }

    /// Lists students filtered by grade and section
    pub async fn get_filtered(&self, filter: StudentFilter) -> Result<Vec<Student>, AppError> {
        Ok(StudentRepository::new(self.db).get_filtered(&filter).await?)
    }
}

/// Fails with `NotFound` unless every referenced student exists.
///
/// Runs on the caller's connection so a batch can check inside its own transaction.
///
/// # Arguments
/// - `db` - Connection or transaction
/// - `ids` - Referenced student IDs, duplicates allowed
///
/// # Returns
/// - `Ok(())` - All students exist
/// - `Err(AppError::NotFound)` - Lists every missing ID
pub async fn require_students<C: ConnectionTrait>(db: &C, ids: &[i32]) -> Result<(), AppError> {
    let missing = StudentRepository::new(db).missing_ids(ids).await?;

    if missing.is_empty() {
        return Ok(());
    }

    let missing = missing
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    Err(AppError::NotFound(format!("Students not found: {}", missing)))
}
