//! Tests for StudentImportService::import.

use sea_orm::EntityTrait;
use serde_json::json;
use vcube::{
    model::import::RawStudentRow,
    server::{
        error::{import::ImportError, Error},
        service::import::student::StudentImportService,
    },
};
use vcube_test_utils::prelude::*;

fn rows(payload: serde_json::Value) -> Vec<RawStudentRow> {
    serde_json::from_value(payload).expect("test payloads deserialize")
}

/// Tests a clean import of a registration sheet.
///
/// Expected: Ok with both students inserted
#[tokio::test]
async fn imports_valid_sheet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_import_tables()
        .with_batch("B1")
        .build()
        .await?;

    let import_service = StudentImportService::new(&test.db);
    let summary = import_service
        .import(rows(json!([
            {"studentId": "STU001", "name": "Asha Rao", "email": "asha@example.com", "mobile": "9876543210", "batchId": "B1", "active": 1, "password": "pw"},
            {"studentId": "STU002", "name": "Vikram Shah", "email": "vikram@example.com", "mobile": "9876543211", "batchId": "B1", "education": [{"degree": "BSc"}]},
        ])))
        .await
        .unwrap();

    assert_eq!(summary.inserted, 2);
    assert_eq!(summary.skipped, 0);

    let students = entity::prelude::Student::find().all(&test.db).await?;
    assert_eq!(students.len(), 2);

    Ok(())
}

/// Tests atomicity when a later row references an unknown batch.
///
/// Expected: Err naming the batch and row; zero students persisted,
/// including the valid first row
#[tokio::test]
async fn aborts_on_unknown_batch() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_import_tables()
        .with_batch("B1")
        .build()
        .await?;

    let import_service = StudentImportService::new(&test.db);
    let result = import_service
        .import(rows(json!([
            {"studentId": "STU001", "name": "Asha Rao", "email": "asha@example.com", "mobile": "9876543210", "batchId": "B1"},
            {"studentId": "STU002", "name": "Vikram Shah", "email": "vikram@example.com", "mobile": "9876543211", "batchId": "B9"},
        ])))
        .await;

    let err = result.err().unwrap();
    assert!(matches!(
        err,
        Error::ImportError(ImportError::UnknownBatch { row: 2, .. })
    ));
    assert!(err.to_string().contains("B9"));

    let students = entity::prelude::Student::find().all(&test.db).await?;
    assert!(students.is_empty());

    Ok(())
}

/// Tests that a missing required field reports the row and field.
///
/// Expected: Err naming row 1 and the email field
#[tokio::test]
async fn reports_missing_field_with_row_number() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_import_tables()
        .with_batch("B1")
        .build()
        .await?;

    let import_service = StudentImportService::new(&test.db);
    let result = import_service
        .import(rows(json!([
            {"studentId": "STU001", "name": "Asha Rao", "mobile": "9876543210", "batchId": "B1"},
        ])))
        .await;

    let err = result.err().unwrap();
    assert!(matches!(
        err,
        Error::ImportError(ImportError::MissingField {
            row: 1,
            field: "email"
        })
    ));

    Ok(())
}

/// Tests that colliding with an existing record is a hard abort rather
/// than a skip; student uploads have no duplicate policy.
///
/// Expected: Err with DbErr, existing data unchanged
#[tokio::test]
async fn aborts_on_colliding_student() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_import_tables()
        .with_batch("B1")
        .with_student("S1", "B1")
        .build()
        .await?;

    let import_service = StudentImportService::new(&test.db);
    let result = import_service
        .import(rows(json!([
            {"id": "S1", "studentId": "STU-S1", "name": "Duplicate", "email": "dup@example.com", "mobile": "9876543212", "batchId": "B1"},
        ])))
        .await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    let students = entity::prelude::Student::find().all(&test.db).await?;
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, "Student S1");

    Ok(())
}
