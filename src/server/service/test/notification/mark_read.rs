use super::*;

/// Tests a student marking their own notification.
///
/// Expected: Ok with the notification read
#[tokio::test]
async fn recipient_marks_own_notification() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let (_, notifications) = create_batch_with_notifications(db, &[Some(student.id)]).await?;

    let service = NotificationService::new(db);
    let notification = service.mark_read(notifications[0].id, student.id).await?;

    assert!(notification.is_read);

    Ok(())
}

/// Tests any student marking a global notification.
///
/// Expected: Ok with the notification read
#[tokio::test]
async fn any_student_marks_global_notification() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let (_, notifications) = create_batch_with_notifications(db, &[None]).await?;

    let service = NotificationService::new(db);
    let notification = service.mark_read(notifications[0].id, student.id).await?;

    assert!(notification.is_read);
    assert_eq!(notification.student_id, None);

    Ok(())
}

/// Tests a student marking a notification addressed to someone else.
///
/// Expected: Err(AuthError::Forbidden) and the notification stays unread
#[tokio::test]
async fn other_student_is_forbidden() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_student(db).await?;
    let intruder = factory::create_student(db).await?;
    let (_, notifications) = create_batch_with_notifications(db, &[Some(owner.id)]).await?;

    let service = NotificationService::new(db);
    let result = service.mark_read(notifications[0].id, intruder.id).await;

    match result {
        Err(AppError::AuthErr(AuthError::Forbidden {
            student_id,
            notification_id,
        })) => {
            assert_eq!(student_id, intruder.id);
            assert_eq!(notification_id, notifications[0].id);
        }
        other => panic!("Expected Forbidden, got: {:?}", other),
    }

    let stored = entity::prelude::Notification::find_by_id(notifications[0].id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.is_read);

    Ok(())
}

/// Tests marking the same notification twice.
///
/// Expected: Ok both times with the notification read
#[tokio::test]
async fn marking_twice_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let (batch, notifications) = create_batch_with_notifications(db, &[Some(student.id)]).await?;

    let service = NotificationService::new(db);
    let first = service.mark_read(notifications[0].id, student.id).await?;
    let second = service.mark_read(notifications[0].id, student.id).await?;

    assert_eq!(first, second);
    assert!(second.is_read);

    let stats = service.batch_stats(batch.id).await?.stats;
    assert_eq!(stats, BatchStats { total: 1, read: 1 });

    Ok(())
}

/// Tests marking a notification that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_notification_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let service = NotificationService::new(db);
    let result = service.mark_read(555, student.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
