//! Tests for MarkImportService::import.

use entity::mark::MarkType;
use sea_orm::EntityTrait;
use serde_json::json;
use vcube::{
    model::import::RawMarkRow,
    server::{
        error::{import::ImportError, Error},
        service::import::mark::MarkImportService,
    },
};
use vcube_test_utils::prelude::*;

fn rows(payload: serde_json::Value) -> Vec<RawMarkRow> {
    serde_json::from_value(payload).expect("test payloads deserialize")
}

/// Tests a clean import of two valid rows.
///
/// Expected: Ok with both rows inserted and persisted
#[tokio::test]
async fn imports_valid_rows() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_import_tables()
        .with_batch("B1")
        .with_student("S1", "B1")
        .with_student("S2", "B1")
        .build()
        .await?;

    let import_service = MarkImportService::new(&test.db);
    let summary = import_service
        .import(rows(json!([
            {"studentId": "S1", "batchId": "B1", "exam": "Midterm", "score": 80, "type": "exam", "date": "2024-01-10"},
            {"studentId": "S2", "batchId": "B1", "exam": "Midterm", "score": "72.5", "type": "exam", "date": "2024-01-10"},
        ])))
        .await
        .unwrap();

    assert_eq!(summary.inserted, 2);
    assert_eq!(summary.skipped, 0);

    let marks = entity::prelude::Mark::find().all(&test.db).await?;
    assert_eq!(marks.len(), 2);

    Ok(())
}

/// Tests atomicity and order-sensitivity of the abort.
///
/// Given [valid, valid, invalid, valid], nothing commits (including the
/// two valid rows ordered before the bad one) and the reported error
/// references the third row.
///
/// Expected: Err naming row 3, zero marks persisted
#[tokio::test]
async fn aborts_whole_upload_on_first_invalid_row() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_import_tables()
        .with_batch("B1")
        .with_student("S1", "B1")
        .with_student("S2", "B1")
        .build()
        .await?;

    let import_service = MarkImportService::new(&test.db);
    let result = import_service
        .import(rows(json!([
            {"studentId": "S1", "batchId": "B1", "exam": "Midterm", "score": 80, "type": "exam", "date": "2024-01-10"},
            {"studentId": "S2", "batchId": "B1", "exam": "Midterm", "score": 85, "type": "exam", "date": "2024-01-10"},
            {"studentId": "S9", "batchId": "B1", "exam": "Midterm", "score": 90, "type": "exam", "date": "2024-01-10"},
            {"studentId": "S1", "batchId": "B1", "exam": "Final", "score": 70, "type": "exam", "date": "2024-02-10"},
        ])))
        .await;

    let err = result.err().unwrap();
    assert!(matches!(
        err,
        Error::ImportError(ImportError::UnknownStudent { row: 3, .. })
    ));
    assert!(err.to_string().contains("row 3"));
    assert!(err.to_string().contains("S9"));

    let marks = entity::prelude::Mark::find().all(&test.db).await?;
    assert!(marks.is_empty());

    Ok(())
}

/// Tests the duplicate-mark scenario: a payload containing the same row
/// twice, submitted twice in sequence.
///
/// Expected: first call inserts 1 and skips the in-payload duplicate;
/// second call inserts 0; exactly one mark persisted, no error
#[tokio::test]
async fn repeated_submission_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_import_tables()
        .with_batch("B1")
        .with_student("S1", "B1")
        .build()
        .await?;

    let payload = json!([
        {"studentId": "S1", "exam": "Midterm", "score": 80, "type": "exam", "date": "2024-01-10", "batchId": "B1"},
        {"studentId": "S1", "exam": "Midterm", "score": 80, "type": "exam", "date": "2024-01-10", "batchId": "B1"},
    ]);

    let import_service = MarkImportService::new(&test.db);

    let first = import_service.import(rows(payload.clone())).await.unwrap();
    assert_eq!(first.inserted, 1);
    assert_eq!(first.skipped, 1);

    let second = import_service.import(rows(payload)).await.unwrap();
    assert_eq!(second.inserted, 0);
    assert_eq!(second.skipped, 2);

    let marks = entity::prelude::Mark::find().all(&test.db).await?;
    assert_eq!(marks.len(), 1);

    Ok(())
}

/// Tests the cross-row referential check between the declared batch and
/// the student's actual batch.
///
/// Expected: Err naming both batches, zero marks persisted
#[tokio::test]
async fn rejects_batch_mismatch_and_rolls_back() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_import_tables()
        .with_batch("B1")
        .with_batch("B2")
        .with_student("S1", "B1")
        .build()
        .await?;

    let import_service = MarkImportService::new(&test.db);
    let result = import_service
        .import(rows(json!([
            {"studentId": "S1", "batchId": "B2", "exam": "Midterm", "score": 80, "type": "exam", "date": "2024-01-10"},
        ])))
        .await;

    let err = result.err().unwrap();
    let message = err.to_string();
    assert!(message.contains("B2"));
    assert!(message.contains("B1"));

    let marks = entity::prelude::Mark::find().all(&test.db).await?;
    assert!(marks.is_empty());

    Ok(())
}

/// Tests skipping an already-persisted mark while inserting new rows in
/// the same upload.
///
/// Expected: Ok with one inserted, one skipped
#[tokio::test]
async fn skips_existing_marks_and_inserts_new_ones() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_import_tables()
        .with_batch("B1")
        .with_student("S1", "B1")
        .with_mark("m1", "S1", "Midterm", "2024-01-10", MarkType::Exam)
        .build()
        .await?;

    let import_service = MarkImportService::new(&test.db);
    let summary = import_service
        .import(rows(json!([
            {"studentId": "S1", "batchId": "B1", "exam": "Midterm", "score": 80, "type": "exam", "date": "2024-01-10"},
            {"studentId": "S1", "batchId": "B1", "exam": "Final", "score": 91, "type": "exam", "date": "2024-02-15"},
        ])))
        .await
        .unwrap();

    assert_eq!(summary.inserted, 1);
    assert_eq!(summary.skipped, 1);

    let marks = entity::prelude::Mark::find().all(&test.db).await?;
    assert_eq!(marks.len(), 2);

    Ok(())
}

/// Tests that the same exam on the same date counts as distinct records
/// across mark types.
///
/// Expected: Ok with both the exam and mock rows inserted
#[tokio::test]
async fn mark_type_is_part_of_the_natural_key() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_import_tables()
        .with_batch("B1")
        .with_student("S1", "B1")
        .with_mark("m1", "S1", "Midterm", "2024-01-10", MarkType::Exam)
        .build()
        .await?;

    let import_service = MarkImportService::new(&test.db);
    let summary = import_service
        .import(rows(json!([
            {"studentId": "S1", "batchId": "B1", "exam": "Midterm", "score": 65, "type": "mock", "date": "2024-01-10"},
        ])))
        .await
        .unwrap();

    assert_eq!(summary.inserted, 1);
    assert_eq!(summary.skipped, 0);

    Ok(())
}

/// Tests error handling when the mark table is missing.
///
/// Expected: Err with DbErr, surfaced as a store failure
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Batch)
        .with_table(entity::prelude::Student)
        .with_batch("B1")
        .with_student("S1", "B1")
        .build()
        .await?;

    let import_service = MarkImportService::new(&test.db);
    let result = import_service
        .import(rows(json!([
            {"studentId": "S1", "batchId": "B1", "exam": "Midterm", "score": 80, "type": "exam", "date": "2024-01-10"},
        ])))
        .await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
