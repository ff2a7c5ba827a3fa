use super::*;

/// Tests that a reused admission number is reported as a conflict.
///
/// Expected: Err(AppError::DbErr) that responds with 409
#[tokio::test]
async fn duplicate_admission_number_is_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    StudentFactory::new(db).admission_number("ADM-77").build().await?;

    let service = StudentService::new(db);
    let err = service
        .create(CreateStudentParams {
            admission_number: "ADM-77".to_string(),
            name: "Copy".to_string(),
            class_grade: None,
            section: None,
        })
        .await
        .unwrap_err();

    assert_eq!(err.into_response().status(), StatusCode::CONFLICT);

    Ok(())
}
