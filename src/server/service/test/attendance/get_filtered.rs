use super::*;

/// Tests an inverted date range.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_inverted_date_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AttendanceService::new(db);
    let result = service
        .get_filtered(AttendanceFilter {
            date_from: NaiveDate::from_ymd_opt(2026, 2, 1),
            date_to: NaiveDate::from_ymd_opt(2026, 1, 1),
            limit: 100,
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a stored status label the application never writes.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn unknown_stored_status_is_internal_error() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_student(db).await?;
    factory::attendance::AttendanceFactory::new(db, student.id)
        .status("Sick")
        .build()
        .await?;

    let service = AttendanceService::new(db);
    let result = service
        .get_filtered(AttendanceFilter {
            limit: 100,
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
