use super::*;

/// Tests ordering of sent batches.
///
/// Expected: Ok with the newest batch first
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let old = NotificationBatchFactory::new(db)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let new = NotificationBatchFactory::new(db).created_at(now).build().await?;
    let middle = NotificationBatchFactory::new(db)
        .created_at(now - Duration::days(1))
        .build()
        .await?;

    let repo = NotificationBatchRepository::new(db);
    let batches = repo.get_recent(0, 100).await?;

    let ids: Vec<i32> = batches.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![new.id, middle.id, old.id]);

    Ok(())
}

/// Tests skip and limit.
///
/// Expected: Ok with only the second newest batch
#[tokio::test]
async fn applies_skip_and_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let mut created = Vec::new();
    for days_ago in [3, 2, 1] {
        created.push(
            NotificationBatchFactory::new(db)
                .created_at(now - Duration::days(days_ago))
                .build()
                .await?,
        );
    }

    let repo = NotificationBatchRepository::new(db);
    let batches = repo.get_recent(1, 1).await?;

    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0].id, created[1].id);

    Ok(())
}
