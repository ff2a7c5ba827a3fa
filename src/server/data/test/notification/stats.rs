use super::*;

/// Tests counting total and read notifications of a batch.
///
/// Expected: Ok with totals that ignore other batches
#[tokio::test]
async fn counts_total_and_read() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let batch = factory::create_notification_batch(db).await?;
    for is_read in [true, true, false] {
        NotificationFactory::new(db, batch.id)
            .read(is_read)
            .build()
            .await?;
    }
    let (other, _) = create_batch_with_notifications(db, &[None, None]).await?;

    let repo = NotificationBatchRepository::new(db);

    assert_eq!(repo.stats(batch.id).await?, BatchStats { total: 3, read: 2 });
    assert_eq!(repo.stats(other.id).await?, BatchStats { total: 2, read: 0 });

    Ok(())
}

/// Tests a batch that reached nobody.
///
/// Expected: Ok with zero counts
#[tokio::test]
async fn empty_batch_has_zero_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let batch = factory::create_notification_batch(db).await?;

    let repo = NotificationBatchRepository::new(db);

    assert_eq!(repo.stats(batch.id).await?, BatchStats { total: 0, read: 0 });

    Ok(())
}
