use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::mark::MarkType;
use sea_orm::EntityTrait;
use serde_json::json;
use vcube::{
    model::{import::RawMarkRow, mark::SaveMarkDto},
    server::controller::mark::{bulk_create_marks, create_mark},
};
use vcube_test_utils::prelude::*;

use crate::util::app_state;

fn bulk_rows(payload: serde_json::Value) -> Vec<RawMarkRow> {
    serde_json::from_value(payload).expect("test payloads deserialize")
}

fn save_dto(payload: serde_json::Value) -> SaveMarkDto {
    serde_json::from_value(payload).expect("test payloads deserialize")
}

/// Expect 201 and a notification when recording a new mark
#[tokio::test]
async fn creates_single_mark() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Mark)?;
    let state = app_state(&test.db);
    let mut events = state.notifier.subscribe();

    let result = create_mark(
        State(state),
        Json(save_dto(json!({
            "studentId": "S1",
            "exam": "Midterm",
            "score": 80.0,
            "type": "exam",
            "date": "2024-01-10",
        }))),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert!(events.try_recv().is_ok());

    Ok(())
}

/// Expect 409 when explicitly inserting onto an existing natural key;
/// the single-entry path treats duplicates as conflicts, not skips
#[tokio::test]
async fn rejects_duplicate_single_mark() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Mark)
        .with_mark("m1", "S1", "Midterm", "2024-01-10", MarkType::Exam)
        .build()
        .await?;
    let state = app_state(&test.db);
    let mut events = state.notifier.subscribe();

    let result = create_mark(
        State(state),
        Json(save_dto(json!({
            "studentId": "S1",
            "exam": "Midterm",
            "score": 95.0,
            "type": "exam",
            "date": "2024-01-10",
        }))),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // The rejected insert is not a mutation
    assert!(events.try_recv().is_err());
    let marks = entity::prelude::Mark::find().all(&test.db).await?;
    assert_eq!(marks.len(), 1);
    assert_eq!(marks[0].score, 75.0);

    Ok(())
}

/// Expect 400 with the row-level message for an invalid bulk upload
#[tokio::test]
async fn bulk_upload_surfaces_first_row_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_import_tables()
        .with_batch("B1")
        .with_student("S1", "B1")
        .build()
        .await?;
    let state = app_state(&test.db);

    let result = bulk_create_marks(
        State(state),
        Json(bulk_rows(json!([
            {"studentId": "S1", "batchId": "B1", "exam": "Midterm", "score": "eighty", "type": "exam", "date": "2024-01-10"},
        ]))),
    )
    .await;

    let err = result.err().unwrap();
    assert!(err.to_string().contains("row 1"));

    let resp = err.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 201 and a notification for a committed bulk upload
#[tokio::test]
async fn bulk_upload_commits_and_notifies() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_import_tables()
        .with_batch("B1")
        .with_student("S1", "B1")
        .build()
        .await?;
    let state = app_state(&test.db);
    let mut events = state.notifier.subscribe();

    let result = bulk_create_marks(
        State(state),
        Json(bulk_rows(json!([
            {"studentId": "S1", "batchId": "B1", "exam": "Midterm", "score": 80, "type": "exam", "date": "2024-01-10"},
        ]))),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert!(events.try_recv().is_ok());

    Ok(())
}
