//! Student data repository for database operations.
//!
//! Besides plain create/read, this repository answers the two questions the engines ask
//! about students: which requested IDs do not exist, and which students currently sit in a
//! given grade and section.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::collections::BTreeSet;

use crate::server::model::student::{CreateStudentParams, Student, StudentFilter};

/// Repository providing database operations for students.
pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    /// Creates a new StudentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `StudentRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a student.
    ///
    /// # Arguments
    /// - `params` - Validated student fields
    ///
    /// # Returns
    /// - `Ok(Student)` - The created student
    /// - `Err(DbErr)` - Database error, including a unique violation on `admission_number`
    pub async fn create(&self, params: CreateStudentParams) -> Result<Student, DbErr> {
        let entity = entity::student::ActiveModel {
            admission_number: ActiveValue::Set(params.admission_number),
            name: ActiveValue::Set(params.name),
            class_grade: ActiveValue::Set(params.class_grade),
            section: ActiveValue::Set(params.section),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Student::from_entity(entity))
    }

    /// Finds a student by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Student))` - Student exists
    /// - `Ok(None)` - No student with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Student>, DbErr> {
        let entity = entity::prelude::Student::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Student::from_entity))
    }

    /// Lists students matching the set grade/section fields, ordered by ID.
    pub async fn get_filtered(&self, filter: &StudentFilter) -> Result<Vec<Student>, DbErr> {
        let mut query = entity::prelude::Student::find();

        if let Some(class_grade) = &filter.class_grade {
            query = query.filter(entity::student::Column::ClassGrade.eq(class_grade.as_str()));
        }
        if let Some(section) = &filter.section {
            query = query.filter(entity::student::Column::Section.eq(section.as_str()));
        }

        let entities = query
            .order_by_asc(entity::student::Column::Id)
            .offset(filter.skip)
            .limit(filter.limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Student::from_entity).collect())
    }

    /// Gets the IDs of students currently placed in the given grade and/or section.
    ///
    /// A `None` field does not constrain the match. With both `None` every student matches,
    /// so callers resolve the global case before reaching here.
    ///
    /// # Arguments
    /// - `class_grade` - Grade to match exactly
    /// - `section` - Section to match exactly
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Matching student IDs in ascending order
    /// - `Err(DbErr)` - Database error during query
    pub async fn ids_in_class(
        &self,
        class_grade: Option<&str>,
        section: Option<&str>,
    ) -> Result<Vec<i32>, DbErr> {
        let mut query = entity::prelude::Student::find()
            .select_only()
            .column(entity::student::Column::Id);

        if let Some(class_grade) = class_grade {
            query = query.filter(entity::student::Column::ClassGrade.eq(class_grade));
        }
        if let Some(section) = section {
            query = query.filter(entity::student::Column::Section.eq(section));
        }

        query
            .order_by_asc(entity::student::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Gets the requested student IDs that do not exist.
    ///
    /// # Arguments
    /// - `ids` - Student IDs to check; duplicates are fine
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Missing IDs, ascending and deduplicated; empty when all exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn missing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        let requested: BTreeSet<i32> = ids.iter().copied().collect();
        if requested.is_empty() {
            return Ok(Vec::new());
        }

        let found: BTreeSet<i32> = entity::prelude::Student::find()
            .select_only()
            .column(entity::student::Column::Id)
            .filter(entity::student::Column::Id.is_in(requested.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await?
            .into_iter()
            .collect();

        Ok(requested.difference(&found).copied().collect())
    }
}
