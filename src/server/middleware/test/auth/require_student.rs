use super::*;

/// Tests an identity naming an existing student.
///
/// Expected: Ok(Student) for that student
#[tokio::test]
async fn resolves_existing_student() -> Result<(), AppError> {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let identity = StudentIdentity(student.id);

    let resolved = AuthGuard::new(db, &identity).require_student().await?;

    assert_eq!(resolved.id, student.id);
    assert_eq!(resolved.admission_number, student.admission_number);

    Ok(())
}

/// Tests an identity naming no student.
///
/// Expected: Err(AuthError::UnknownStudent)
#[tokio::test]
async fn rejects_unknown_student() -> Result<(), AppError> {
    let test = TestBuilder::new().with_student_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let identity = StudentIdentity(999);
    let result = AuthGuard::new(db, &identity).require_student().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UnknownStudent(999)))
    ));

    Ok(())
}
