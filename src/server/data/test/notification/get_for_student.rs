use super::*;

fn inbox(student_id: i32) -> InboxParams {
    InboxParams {
        student_id,
        skip: 0,
        limit: 100,
    }
}

/// Tests which notifications appear in a student's inbox.
///
/// Expected: Ok with the student's own and global notifications, none addressed to others
#[tokio::test]
async fn includes_own_and_global_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let other = factory::create_student(db).await?;
    let (_, created) =
        create_batch_with_notifications(db, &[Some(student.id), Some(other.id), None]).await?;

    let repo = NotificationRepository::new(db);
    let notifications = repo.get_for_student(inbox(student.id)).await?;

    let mut ids: Vec<i32> = notifications.iter().map(|n| n.id).collect();
    ids.sort();
    assert_eq!(ids, vec![created[0].id, created[2].id]);

    Ok(())
}

/// Tests inbox ordering.
///
/// Expected: Ok with unread before read, each group newest first
#[tokio::test]
async fn orders_unread_first_then_newest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let batch = factory::create_notification_batch(db).await?;
    let now = Utc::now();

    let read_new = NotificationFactory::new(db, batch.id)
        .student_id(Some(student.id))
        .read(true)
        .created_at(now)
        .build()
        .await?;
    let unread_old = NotificationFactory::new(db, batch.id)
        .student_id(Some(student.id))
        .created_at(now - Duration::hours(5))
        .build()
        .await?;
    let unread_new = NotificationFactory::new(db, batch.id)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let repo = NotificationRepository::new(db);
    let notifications = repo.get_for_student(inbox(student.id)).await?;

    let ids: Vec<i32> = notifications.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![unread_new.id, unread_old.id, read_new.id]);

    Ok(())
}
