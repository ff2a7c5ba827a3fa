use super::*;

/// Tests the sent list after two dispatches and a read.
///
/// Expected: Ok with the latest dispatch first and per-batch counts
#[tokio::test]
async fn lists_batches_with_their_own_stats() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_student_in(db, "5", "A").await?;
    factory::create_student_in(db, "5", "B").await?;

    let service = NotificationService::new(db);
    let grade = service.dispatch(params(None, Some("5"), None)).await?;
    let single = service.dispatch(params(Some(a.id), None, None)).await?;

    service
        .mark_read(single.notifications[0].id, a.id)
        .await?;

    let sent = service.get_sent(0, 100).await?;

    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].batch.id, single.batch.batch.id);
    assert_eq!(sent[0].stats, BatchStats { total: 1, read: 1 });
    assert_eq!(sent[1].batch.id, grade.batch.batch.id);
    assert_eq!(sent[1].stats, BatchStats { total: 2, read: 0 });

    Ok(())
}
