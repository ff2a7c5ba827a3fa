pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_student_table;
mod m20260105_000002_create_attendance_table;
mod m20260105_000003_create_exam_result_table;
mod m20260106_000004_create_notification_batch_table;
mod m20260106_000005_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_student_table::Migration),
            Box::new(m20260105_000002_create_attendance_table::Migration),
            Box::new(m20260105_000003_create_exam_result_table::Migration),
            Box::new(m20260106_000004_create_notification_batch_table::Migration),
            Box::new(m20260106_000005_create_notification_table::Migration),
        ]
    }
}
