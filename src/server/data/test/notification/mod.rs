use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory,
    factory::{
        helpers::create_batch_with_notifications, notification::NotificationFactory,
        notification_batch::NotificationBatchFactory,
    },
};

use crate::server::{
    data::notification::{NotificationBatchRepository, NotificationRepository},
    model::notification::{BatchStats, InboxParams, NotificationBatch},
};

mod get_for_student;
mod get_recent;
mod mark_read;
mod stats;
