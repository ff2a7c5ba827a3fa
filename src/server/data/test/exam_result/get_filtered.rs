use super::*;

/// Tests filtering by student and subject.
///
/// Expected: Ok with only the matching result
#[tokio::test]
async fn filters_by_student_and_subject() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_exam_result_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let other = factory::create_student(db).await?;

    ExamResultFactory::new(db, student.id).subject("Mathematics").build().await?;
    ExamResultFactory::new(db, student.id).subject("English").build().await?;
    ExamResultFactory::new(db, other.id).subject("Mathematics").build().await?;

    let repo = ExamResultRepository::new(db);
    let results = repo
        .get_filtered(&ExamResultFilter {
            student_id: Some(student.id),
            subject: Some("Mathematics".to_string()),
            limit: 100,
            ..Default::default()
        })
        .await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].student_id, student.id);
    assert_eq!(results[0].subject, "Mathematics");

    Ok(())
}

/// Tests listing without filters.
///
/// Expected: Ok with every stored result
#[tokio::test]
async fn returns_all_without_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_exam_result_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    factory::create_exam_result(db, student.id).await?;

    let repo = ExamResultRepository::new(db);
    let results = repo
        .get_filtered(&ExamResultFilter {
            limit: 100,
            ..Default::default()
        })
        .await?;

    assert_eq!(results.len(), 1);

    Ok(())
}
