use super::*;

/// Tests a batch of distinct keys.
///
/// Verifies that every entry produces its own row and that the returned records
/// match their entries position by position.
///
/// Expected: Ok with one stored record per entry, in input order
#[tokio::test]
async fn inserts_one_record_per_distinct_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_student(db).await?;
    let second = factory::create_student(db).await?;

    let inputs = vec![
        mark(first.id, day(5), AttendanceStatus::Present),
        mark(first.id, day(6), AttendanceStatus::HalfDay),
        mark(second.id, day(5), AttendanceStatus::Absent),
    ];

    let repo = AttendanceRepository::new(db);
    let records = repo.upsert_batch(inputs.clone()).await?;

    assert_eq!(records.len(), 3);
    for (record, input) in records.iter().zip(&inputs) {
        assert_eq!(record.student_id, input.student_id);
        assert_eq!(record.date, input.date);
        assert_eq!(record.status, input.status);
        assert_eq!(record.class_grade, input.class_grade);
    }
    assert_eq!(row_count(db).await?, 3);

    Ok(())
}

/// Tests a batch naming the same key twice.
///
/// Verifies that the later entry is applied on top of the earlier one and that both
/// result positions show the final state.
///
/// Expected: Ok with a single row holding the last status
#[tokio::test]
async fn last_entry_wins_for_repeated_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;

    let repo = AttendanceRepository::new(db);
    let records = repo
        .upsert_batch(vec![
            mark(student.id, day(5), AttendanceStatus::Present),
            mark(student.id, day(5), AttendanceStatus::Absent),
        ])
        .await?;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, records[1].id);
    assert_eq!(records[0].status, AttendanceStatus::Absent);
    assert_eq!(records[1].status, AttendanceStatus::Absent);
    assert_eq!(row_count(db).await?, 1);

    Ok(())
}

/// Tests applying the same entry in two separate calls.
///
/// Expected: Ok with the same record ID both times and no duplicate row
#[tokio::test]
async fn repeated_call_updates_same_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let input = mark(student.id, day(7), AttendanceStatus::Late);

    let repo = AttendanceRepository::new(db);
    let first = repo.upsert_batch(vec![input.clone()]).await?;
    let second = repo.upsert_batch(vec![input]).await?;

    assert_eq!(first[0].id, second[0].id);
    assert_eq!(second[0].status, AttendanceStatus::Late);
    assert_eq!(row_count(db).await?, 1);

    Ok(())
}

/// Tests that an update replaces the whole record.
///
/// Verifies that optional fields missing from the new entry are cleared rather than
/// kept from the stored record.
///
/// Expected: Ok with remarks and absence type cleared
#[tokio::test]
async fn overwrite_clears_omitted_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let existing = AttendanceFactory::new(db, student.id)
        .date(day(8))
        .status("Absent")
        .remarks("Fever")
        .absence_type("Full Day")
        .build()
        .await?;

    let repo = AttendanceRepository::new(db);
    let records = repo
        .upsert_batch(vec![mark(student.id, day(8), AttendanceStatus::Present)])
        .await?;

    assert_eq!(records[0].id, existing.id);
    assert_eq!(records[0].status, AttendanceStatus::Present);
    assert_eq!(records[0].remarks, None);
    assert_eq!(records[0].absence_type, None);

    Ok(())
}

/// Tests an empty batch.
///
/// Expected: Ok with no records and no rows written
#[tokio::test]
async fn empty_batch_writes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AttendanceRepository::new(db);
    let records = repo.upsert_batch(Vec::new()).await?;

    assert!(records.is_empty());
    assert_eq!(row_count(db).await?, 0);

    Ok(())
}

/// Tests that the natural-key index rejects a second row for the same key.
///
/// A concurrent writer that passed the lookup at the same time hits this index at
/// insert; the resulting error must reach the client as a conflict.
///
/// Expected: Err(DbErr) classified as a unique violation and mapped to 409
#[tokio::test]
async fn duplicate_key_insert_maps_to_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    AttendanceFactory::new(db, student.id)
        .date(day(9))
        .build()
        .await?;

    let err = AttendanceFactory::new(db, student.id)
        .date(day(9))
        .build()
        .await
        .unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    let response = AppError::from(err).into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    Ok(())
}
