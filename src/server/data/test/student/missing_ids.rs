use super::*;

/// Tests that existing IDs are not reported.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn none_missing_when_all_exist() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_student(db).await?;
    let b = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let missing = repo.missing_ids(&[a.id, b.id, a.id]).await?;

    assert!(missing.is_empty());

    Ok(())
}

/// Tests reporting unknown IDs.
///
/// Expected: Ok with each unknown ID once, ascending
#[tokio::test]
async fn reports_unknown_ids_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let missing = repo.missing_ids(&[9001, a.id, 9000, 9001]).await?;

    assert_eq!(missing, vec![9000, 9001]);

    Ok(())
}

/// Tests an empty request.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn empty_request_reports_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let missing = repo.missing_ids(&[]).await?;

    assert!(missing.is_empty());

    Ok(())
}
