use super::*;

/// Tests setting the read flag.
///
/// Expected: Ok with the notification read and the change persisted
#[tokio::test]
async fn sets_read_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, notifications) = create_batch_with_notifications(db, &[None]).await?;

    let repo = NotificationRepository::new(db);
    let updated = repo.mark_read(notifications[0].id).await?;

    assert!(updated.is_read);
    let stored = repo.find_by_id(notifications[0].id).await?.unwrap();
    assert!(stored.is_read);

    Ok(())
}

/// Tests marking a notification that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn missing_notification_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationRepository::new(db);
    let result = repo.mark_read(404).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
