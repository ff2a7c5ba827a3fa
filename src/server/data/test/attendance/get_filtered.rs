use super::*;

fn filter() -> AttendanceFilter {
    AttendanceFilter {
        limit: 100,
        ..Default::default()
    }
}

/// Tests filtering by student.
///
/// Expected: Ok with only that student's records, newest date first
#[tokio::test]
async fn filters_by_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let other = factory::create_student(db).await?;

    AttendanceFactory::new(db, student.id).date(day(5)).build().await?;
    AttendanceFactory::new(db, student.id).date(day(6)).build().await?;
    AttendanceFactory::new(db, other.id).date(day(5)).build().await?;

    let repo = AttendanceRepository::new(db);
    let records = repo
        .get_filtered(&AttendanceFilter {
            student_id: Some(student.id),
            ..filter()
        })
        .await?;

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.student_id == student.id));
    assert_eq!(records[0].date, day(6));
    assert_eq!(records[1].date, day(5));

    Ok(())
}

/// Tests filtering by an inclusive date range.
///
/// Expected: Ok with records on both boundary dates and none outside
#[tokio::test]
async fn filters_by_date_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    for d in [4, 5, 6, 7] {
        AttendanceFactory::new(db, student.id).date(day(d)).build().await?;
    }

    let repo = AttendanceRepository::new(db);
    let records = repo
        .get_filtered(&AttendanceFilter {
            date_from: Some(day(5)),
            date_to: Some(day(6)),
            ..filter()
        })
        .await?;

    let dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![day(6), day(5)]);

    Ok(())
}

/// Tests filtering by the class recorded on the attendance row.
///
/// Expected: Ok with only records taken in grade 5 section B
#[tokio::test]
async fn filters_by_class() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    AttendanceFactory::new(db, student.id)
        .date(day(5))
        .class("5", "B")
        .build()
        .await?;
    AttendanceFactory::new(db, student.id)
        .date(day(6))
        .class("5", "A")
        .build()
        .await?;

    let repo = AttendanceRepository::new(db);
    let records = repo
        .get_filtered(&AttendanceFilter {
            class_grade: Some("5".to_string()),
            section: Some("B".to_string()),
            ..filter()
        })
        .await?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date, day(5));

    Ok(())
}

/// Tests skip and limit.
///
/// Expected: Ok with the second and third newest records
#[tokio::test]
async fn applies_skip_and_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    for d in 1..=5 {
        AttendanceFactory::new(db, student.id).date(day(d)).build().await?;
    }

    let repo = AttendanceRepository::new(db);
    let records = repo
        .get_filtered(&AttendanceFilter {
            skip: 1,
            limit: 2,
            ..Default::default()
        })
        .await?;

    let dates: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
    assert_eq!(dates, vec![day(4), day(3)]);

    Ok(())
}

/// Tests reading a row whose status label is not a known attendance status.
///
/// Rows written outside the application can carry any label; the repository converts
/// every row it returns and must report the bad one instead of passing it on.
///
/// Expected: Err(AppError::InternalErr) naming the record
#[tokio::test]
async fn unknown_stored_status_is_internal_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    let stored = AttendanceFactory::new(db, student.id)
        .date(day(3))
        .status("Sick")
        .build()
        .await?;

    let repo = AttendanceRepository::new(db);
    let result = repo.get_filtered(&filter()).await;

    assert!(matches!(
        result,
        Err(AppError::InternalErr(InternalError::InvalidAttendanceStatus { record_id, .. }))
            if record_id == stored.id
    ));

    Ok(())
}
