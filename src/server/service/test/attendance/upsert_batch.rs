use super::*;

/// Tests applying a batch for existing students.
///
/// Expected: Ok with typed records in input order
#[tokio::test]
async fn returns_typed_records() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_student(db).await?;
    let b = factory::create_student(db).await?;

    let service = AttendanceService::new(db);
    let records = service
        .upsert_batch(vec![
            mark(a.id, AttendanceStatus::HalfDay),
            mark(b.id, AttendanceStatus::Present),
        ])
        .await?;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].student_id, a.id);
    assert_eq!(records[0].status, AttendanceStatus::HalfDay);
    assert_eq!(records[1].status, AttendanceStatus::Present);

    Ok(())
}

/// Tests a batch that references an unknown student.
///
/// Verifies that the check runs before anything is written, so entries for valid
/// students in the same batch are not stored either.
///
/// Expected: Err(AppError::NotFound) naming the missing ID, no rows written
#[tokio::test]
async fn unknown_student_rejects_whole_batch() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let service = AttendanceService::new(db);
    let result = service
        .upsert_batch(vec![
            mark(student.id, AttendanceStatus::Present),
            mark(424242, AttendanceStatus::Absent),
        ])
        .await;

    match result {
        Err(AppError::NotFound(msg)) => assert!(msg.contains("424242")),
        other => panic!("Expected NotFound, got: {:?}", other),
    }

    let count = entity::prelude::Attendance::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
