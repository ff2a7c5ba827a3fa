use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::exam_result::ExamResultRepository,
    error::AppError,
    model::exam_result::{ExamResult, ExamResultFilter, UpsertExamResultParam},
    service::student::require_students,
};

pub struct ExamResultService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExamResultService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Applies a batch of exam results in one transaction.
    ///
    /// # Returns
    /// - `Ok(Vec<ExamResult>)` - Stored result per input, in input order
    /// - `Err(AppError::NotFound)` - A referenced student does not exist
    /// - `Err(AppError::DbErr)` - Database error, or a concurrent writer took a key first
    pub async fn upsert_batch(
        &self,
        params: Vec<UpsertExamResultParam>,
    ) -> Result<Vec<ExamResult>, AppError> {
        let count = params.len();
        let txn = self.db.begin().await?;

        let student_ids: Vec<i32> = params.iter().map(|p| p.student_id).collect();
        require_students(&txn, &student_ids).await?;

        let results = ExamResultRepository::new(&txn).upsert_batch(params).await?;

        txn.commit().await?;

        tracing::info!("Applied exam result batch of {} records", count);

        Ok(results)
    }

    /// Lists exam results matching the filter
    pub async fn get_filtered(&self, filter: ExamResultFilter) -> Result<Vec<ExamResult>, AppError> {
        Ok(ExamResultRepository::new(self.db)
            .get_filtered(&filter)
            .await?)
    }
}
