use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::attendance::AttendanceRepository,
    error::AppError,
    model::attendance::{AttendanceFilter, AttendanceRecord, UpsertAttendanceParam},
    service::student::require_students,
};

pub struct AttendanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies a batch of attendance facts.
    ///
    /// The whole batch commits or none of it does. Rolled back on any early return since
    /// the transaction is dropped uncommitted.
    ///
    /// # Arguments
    /// - `params` - Attendance facts in submission order
    ///
    /// # Returns
    /// - `Ok(Vec<AttendanceRecord>)` - Stored record per input, in input order
    /// - `Err(AppError::NotFound)` - A referenced student does not exist
    /// - `Err(AppError::DbErr)` - Database error, or a concurrent writer took a key first
    pub async fn upsert_batch(
        &self,
        params: Vec<UpsertAttendanceParam>,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let count = params.len();
        let txn = self.db.begin().await?;

        let student_ids: Vec<i32> = params.iter().map(|p| p.student_id).collect();
        require_students(&txn, &student_ids).await?;

        let records = AttendanceRepository::new(&txn).upsert_batch(params).await?;

        txn.commit().await?;

        tracing::info!("Applied attendance batch of {} records", count);

        Ok(records)
    }

    /// Lists attendance records matching the filter
    pub async fn get_filtered(
        &self,
        filter: AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let filter = filter.validate()?;

        AttendanceRepository::new(self.db).get_filtered(&filter).await
    }
}
