use sea_orm::entity::prelude::*;

/// A single delivered notification. A null `student_id` marks a global notification.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notification")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_id: Option<i32>,
    pub batch_id: i32,
    pub title: String,
    pub message: String,
    pub attachment_url: Option<String>,
    pub is_read: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::notification_batch::Entity",
        from = "Column::BatchId",
        to = "super::notification_batch::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    NotificationBatch,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::notification_batch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NotificationBatch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
