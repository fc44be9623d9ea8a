//! Tests for AttendanceImportService::import.

use entity::attendance::AttendanceType;
use sea_orm::EntityTrait;
use serde_json::json;
use vcube::{
    model::import::AttendanceBulkRequest,
    server::{
        error::{import::ImportError, Error},
        service::import::attendance::AttendanceImportService,
    },
};
use vcube_test_utils::prelude::*;

fn request(payload: serde_json::Value) -> AttendanceBulkRequest {
    serde_json::from_value(payload).expect("test payloads deserialize")
}

/// Tests a clean import of one month of attendance.
///
/// Expected: Ok with all rows inserted
#[tokio::test]
async fn imports_valid_month() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_import_tables()
        .with_batch("B1")
        .with_student("S1", "B1")
        .with_student("S2", "B1")
        .build()
        .await?;

    let import_service = AttendanceImportService::new(&test.db);
    let summary = import_service
        .import(request(json!({
            "batchId": "B1",
            "month": "2024-02",
            "attendanceData": [
                {"studentId": "S1", "date": "2024-02-05", "type": "class", "present": true, "inTime": "09:00"},
                {"studentId": "S2", "date": "2024-02-05", "type": "lab", "present": false},
            ],
        })))
        .await
        .unwrap();

    assert_eq!(summary.inserted, 2);
    assert_eq!(summary.skipped, 0);

    Ok(())
}

/// Tests the unknown-student scenario: one row of the payload references
/// a student that does not exist.
///
/// Expected: Err naming the student; zero attendance rows persisted even
/// though the other rows were valid
#[tokio::test]
async fn aborts_on_unknown_student() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_import_tables()
        .with_batch("B1")
        .with_student("S1", "B1")
        .build()
        .await?;

    let import_service = AttendanceImportService::new(&test.db);
    let result = import_service
        .import(request(json!({
            "batchId": "B1",
            "month": "2024-02",
            "attendanceData": [
                {"studentId": "S1", "date": "2024-02-05", "type": "class", "present": true},
                {"studentId": "S9", "date": "2024-02-05", "type": "class", "present": true},
            ],
        })))
        .await;

    let err = result.err().unwrap();
    assert!(matches!(
        err,
        Error::ImportError(ImportError::UnknownStudent { row: 2, .. })
    ));
    assert!(err.to_string().contains("S9"));

    let records = entity::prelude::Attendance::find().all(&test.db).await?;
    assert!(records.is_empty());

    Ok(())
}

/// Tests idempotency of re-submitting the same attendance file.
///
/// Expected: second submission reports every row skipped and persists
/// nothing new
#[tokio::test]
async fn repeated_submission_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_import_tables()
        .with_batch("B1")
        .with_student("S1", "B1")
        .build()
        .await?;

    let payload = json!({
        "batchId": "B1",
        "month": "2024-02",
        "attendanceData": [
            {"studentId": "S1", "date": "2024-02-05", "type": "class", "present": true},
            {"studentId": "S1", "date": "2024-02-06", "type": "class", "present": true},
        ],
    });

    let import_service = AttendanceImportService::new(&test.db);

    let first = import_service.import(request(payload.clone())).await.unwrap();
    assert_eq!(first.inserted, 2);
    assert_eq!(first.skipped, 0);

    let second = import_service.import(request(payload)).await.unwrap();
    assert_eq!(second.inserted, 0);
    assert_eq!(second.skipped, 2);

    let records = entity::prelude::Attendance::find().all(&test.db).await?;
    assert_eq!(records.len(), 2);

    Ok(())
}

/// Tests envelope validation before any row is examined.
///
/// Expected: Err for each missing envelope field
#[tokio::test]
async fn rejects_incomplete_envelope() -> Result<(), TestError> {
    let test = TestBuilder::new().with_import_tables().build().await?;

    let import_service = AttendanceImportService::new(&test.db);

    for payload in [
        json!({"month": "2024-02", "attendanceData": []}),
        json!({"batchId": "B1", "attendanceData": []}),
        json!({"batchId": "B1", "month": "2024-02"}),
    ] {
        let result = import_service.import(request(payload)).await;

        assert!(matches!(
            result,
            Err(Error::ImportError(ImportError::MissingEnvelopeField))
        ));
    }

    Ok(())
}

/// Tests the envelope's batch reference.
///
/// Expected: Err naming the unknown batch
#[tokio::test]
async fn rejects_unknown_envelope_batch() -> Result<(), TestError> {
    let test = TestBuilder::new().with_import_tables().build().await?;

    let import_service = AttendanceImportService::new(&test.db);
    let result = import_service
        .import(request(json!({
            "batchId": "B9",
            "month": "2024-02",
            "attendanceData": [],
        })))
        .await;

    let err = result.err().unwrap();
    assert!(matches!(
        err,
        Error::ImportError(ImportError::UnknownEnvelopeBatch { .. })
    ));
    assert!(err.to_string().contains("B9"));

    Ok(())
}

/// Tests that an attendance row already on record skips while new session
/// types for the same day insert.
///
/// Expected: Ok with one inserted, one skipped
#[tokio::test]
async fn session_type_is_part_of_the_natural_key() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_import_tables()
        .with_batch("B1")
        .with_student("S1", "B1")
        .with_attendance("S1", "2024-02-05", AttendanceType::Class)
        .build()
        .await?;

    let import_service = AttendanceImportService::new(&test.db);
    let summary = import_service
        .import(request(json!({
            "batchId": "B1",
            "month": "2024-02",
            "attendanceData": [
                {"studentId": "S1", "date": "2024-02-05", "type": "class", "present": true},
                {"studentId": "S1", "date": "2024-02-05", "type": "hr_session", "present": true},
            ],
        })))
        .await
        .unwrap();

    assert_eq!(summary.inserted, 1);
    assert_eq!(summary.skipped, 1);

    Ok(())
}
