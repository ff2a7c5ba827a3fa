use super::*;

/// Tests applying results for an existing student.
///
/// Expected: Ok with one result per subject
#[tokio::test]
async fn stores_results() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_exam_result_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let service = ExamResultService::new(db);
    let results = service
        .upsert_batch(vec![
            result(student.id, "Hindi"),
            result(student.id, "Social Studies"),
        ])
        .await?;

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.student_id == student.id));

    Ok(())
}

/// Tests a result for an unknown student.
///
/// Expected: Err(AppError::NotFound), nothing stored
#[tokio::test]
async fn unknown_student_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_exam_result_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ExamResultService::new(db);
    let outcome = service.upsert_batch(vec![result(77, "Hindi")]).await;

    assert!(matches!(outcome, Err(AppError::NotFound(_))));

    let count = entity::prelude::ExamResult::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
