//! Attendance data repository for database operations.
//!
//! Attendance rows are identified by `(student_id, date)`. Batch submissions are applied
//! through the natural-key upsert, so re-submitting a day for a student corrects the
//! stored record instead of adding a second one.

use chrono::NaiveDate;
use sea_orm::{
    ActiveValue, ColumnTrait, Condition, ConnectionTrait, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::upsert::{apply_batch, NaturalKeyed},
    error::AppError,
    model::attendance::{AttendanceFilter, AttendanceRecord, UpsertAttendanceParam},
};

impl NaturalKeyed for UpsertAttendanceParam {
    type Entity = entity::prelude::Attendance;
    type ActiveModel = entity::attendance::ActiveModel;
    type Key = (i32, NaiveDate);

    fn natural_key(&self) -> Self::Key {
        (self.student_id, self.date)
    }

    fn key_filter(key: &Self::Key) -> Condition {
        Condition::all()
            .add(entity::attendance::Column::StudentId.eq(key.0))
            .add(entity::attendance::Column::Date.eq(key.1))
    }

    fn create(self) -> Self::ActiveModel {
        entity::attendance::ActiveModel {
            id: ActiveValue::NotSet,
            student_id: ActiveValue::Set(self.student_id),
            date: ActiveValue::Set(self.date),
            status: ActiveValue::Set(self.status.as_str().to_string()),
            remarks: ActiveValue::Set(self.remarks),
            class_grade: ActiveValue::Set(self.class_grade),
            section: ActiveValue::Set(self.section),
            absence_type: ActiveValue::Set(self.absence_type),
        }
    }

    fn overwrite(self, existing: entity::attendance::Model) -> Self::ActiveModel {
        let mut active = existing.into_active_model();
        active.status = ActiveValue::Set(self.status.as_str().to_string());
        active.remarks = ActiveValue::Set(self.remarks);
        active.class_grade = ActiveValue::Set(self.class_grade);
        active.section = ActiveValue::Set(self.section);
        active.absence_type = ActiveValue::Set(self.absence_type);
        active
    }
}

/// Repository providing database operations for attendance records.
pub struct AttendanceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AttendanceRepository<'a, C> {
    /// Creates a new AttendanceRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `AttendanceRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Applies a batch of attendance facts by `(student_id, date)`.
    ///
    /// # Arguments
    /// - `params` - Attendance facts in submission order
    ///
    /// # Returns
    /// - `Ok(Vec<AttendanceRecord>)` - Stored record per input, in input order
    /// - `Err(AppError::DbErr)` - Database error during lookup or write
    /// - `Err(AppError::InternalErr)` - A stored status label is not recognized
    pub async fn upsert_batch(
        &self,
        params: Vec<UpsertAttendanceParam>,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let models = apply_batch(self.db, params).await?;

        models.into_iter().map(AttendanceRecord::from_entity).collect()
    }

    /// Lists attendance records matching every set filter field.
    ///
    /// Ordered by date descending, then student ID.
    ///
    /// # Arguments
    /// - `filter` - Student, class and date range filters plus skip/limit
    ///
    /// # Returns
    /// - `Ok(Vec<AttendanceRecord>)` - Matching records
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - A stored status label is not recognized
    pub async fn get_filtered(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let mut query = entity::prelude::Attendance::find();

        if let Some(student_id) = filter.student_id {
            query = query.filter(entity::attendance::Column::StudentId.eq(student_id));
        }
        if let Some(class_grade) = &filter.class_grade {
            query = query.filter(entity::attendance::Column::ClassGrade.eq(class_grade.as_str()));
        }
        if let Some(section) = &filter.section {
            query = query.filter(entity::attendance::Column::Section.eq(section.as_str()));
        }
        if let Some(date_from) = filter.date_from {
            query = query.filter(entity::attendance::Column::Date.gte(date_from));
        }
        if let Some(date_to) = filter.date_to {
            query = query.filter(entity::attendance::Column::Date.lte(date_to));
        }

        let models = query
            .order_by_desc(entity::attendance::Column::Date)
            .order_by_asc(entity::attendance::Column::StudentId)
            .offset(filter.skip)
            .limit(filter.limit)
            .all(self.db)
            .await?;

        models.into_iter().map(AttendanceRecord::from_entity).collect()
    }
}
