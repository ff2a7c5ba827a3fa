//! Exam result data repository.
//!
//! Results are identified by `(student_id, exam_title, subject)`; re-entering marks for
//! the same subject of the same exam replaces the stored row.

use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::upsert::{apply_batch, NaturalKeyed},
    model::exam_result::{ExamResult, ExamResultFilter, UpsertExamResultParam},
};

impl NaturalKeyed for UpsertExamResultParam {
    type Entity = entity::prelude::ExamResult;
    type ActiveModel = entity::exam_result::ActiveModel;
    type Key = (i32, String, String);

    fn natural_key(&self) -> Self::Key {
        (self.student_id, self.exam_title.clone(), self.subject.clone())
    }

    fn key_filter(key: &Self::Key) -> Condition {
        Condition::all()
            .add(entity::exam_result::Column::StudentId.eq(key.0))
            .add(entity::exam_result::Column::ExamTitle.eq(key.1.as_str()))
            .add(entity::exam_result::Column::Subject.eq(key.2.as_str()))
    }

    fn create(self) -> Self::ActiveModel {
        entity::exam_result::ActiveModel {
            id: ActiveValue::NotSet,
            student_id: ActiveValue::Set(self.student_id),
            exam_title: ActiveValue::Set(self.exam_title),
            exam_date: ActiveValue::Set(self.exam_date),
            subject: ActiveValue::Set(self.subject),
            marks_obtained: ActiveValue::Set(self.marks_obtained),
            total_marks: ActiveValue::Set(self.total_marks),
            grade: ActiveValue::Set(self.grade),
        }
    }

    fn overwrite(self, existing: entity::exam_result::Model) -> Self::ActiveModel {
        let mut active = existing.into_active_model();
        active.exam_date = ActiveValue::Set(self.exam_date);
        active.marks_obtained = ActiveValue::Set(self.marks_obtained);
        active.total_marks = ActiveValue::Set(self.total_marks);
        active.grade = ActiveValue::Set(self.grade);
        active
    }
}

pub struct ExamResultRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ExamResultRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Applies a batch of exam results by `(student_id, exam_title, subject)`.
    ///
    /// # Returns
    /// - `Ok(Vec<ExamResult>)` - Stored result per input, in input order
    /// - `Err(DbErr)` - Database error during lookup or write
    pub async fn upsert_batch(
        &self,
        params: Vec<UpsertExamResultParam>,
    ) -> Result<Vec<ExamResult>, DbErr> {
        let models = apply_batch(self.db, params).await?;

        Ok(models.into_iter().map(ExamResult::from_entity).collect())
    }

    /// Lists exam results ordered by exam date descending, then subject.
    pub async fn get_filtered(&self, filter: &ExamResultFilter) -> Result<Vec<ExamResult>, DbErr> {
        let mut query = entity::prelude::ExamResult::find();

        if let Some(student_id) = filter.student_id {
            query = query.filter(entity::exam_result::Column::StudentId.eq(student_id));
        }
        if let Some(exam_title) = &filter.exam_title {
            query = query.filter(entity::exam_result::Column::ExamTitle.eq(exam_title.as_str()));
        }
        if let Some(subject) = &filter.subject {
            query = query.filter(entity::exam_result::Column::Subject.eq(subject.as_str()));
        }

        let models = query
            .order_by_desc(entity::exam_result::Column::ExamDate)
            .order_by_asc(entity::exam_result::Column::Subject)
            .order_by_asc(entity::exam_result::Column::Id)
            .offset(filter.skip)
            .limit(filter.limit)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(ExamResult::from_entity).collect())
    }
}
