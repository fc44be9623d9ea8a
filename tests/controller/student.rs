use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::EntityTrait;
use serde_json::json;
use vcube::{
    model::{import::RawStudentRow, student::SaveStudentDto},
    server::controller::student::{bulk_create_students, create_student, update_student},
};
use vcube_test_utils::prelude::*;

use crate::util::app_state;

fn bulk_rows(payload: serde_json::Value) -> Vec<RawStudentRow> {
    serde_json::from_value(payload).expect("test payloads deserialize")
}

fn save_dto(payload: serde_json::Value) -> SaveStudentDto {
    serde_json::from_value(payload).expect("test payloads deserialize")
}

/// Expect 201 and a change notification for a committed bulk upload
#[tokio::test]
async fn bulk_upload_commits_and_notifies() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_import_tables()
        .with_batch("B1")
        .build()
        .await?;
    let state = app_state(&test.db);
    let mut events = state.notifier.subscribe();

    let result = bulk_create_students(
        State(state),
        Json(bulk_rows(json!([
            {"studentId": "STU001", "name": "Asha Rao", "email": "asha@example.com", "mobile": "9876543210", "batchId": "B1"},
        ]))),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Notification fires after the commit
    assert!(events.try_recv().is_ok());

    Ok(())
}

/// Expect 400 and no change notification for an aborted bulk upload
#[tokio::test]
async fn aborted_bulk_upload_does_not_notify() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_import_tables()
        .with_batch("B1")
        .build()
        .await?;
    let state = app_state(&test.db);
    let mut events = state.notifier.subscribe();

    let result = bulk_create_students(
        State(state),
        Json(bulk_rows(json!([
            {"studentId": "STU001", "name": "Asha Rao", "email": "asha@example.com", "mobile": "9876543210", "batchId": "B9"},
        ]))),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert!(events.try_recv().is_err());

    let students = entity::prelude::Student::find().all(&test.db).await?;
    assert!(students.is_empty());

    Ok(())
}

/// Expect 201 when registering a single student
#[tokio::test]
async fn creates_single_student() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Student)?;
    let state = app_state(&test.db);

    let result = create_student(
        State(state),
        Json(save_dto(json!({
            "studentId": "STU001",
            "name": "Asha Rao",
            "email": "asha@example.com",
            "mobile": "9876543210",
            "batchId": "B1",
            "active": true,
            "password": "pw",
            "profileComplete": false,
        }))),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let students = entity::prelude::Student::find().all(&test.db).await?;
    assert_eq!(students.len(), 1);

    Ok(())
}

/// Expect 200 rather than an error when updating an unknown student; the
/// response reports zero changes
#[tokio::test]
async fn update_unknown_student_is_not_an_error() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Student)?;
    let state = app_state(&test.db);

    let result = update_student(
        State(state),
        axum::extract::Path("missing".to_string()),
        Json(save_dto(json!({
            "studentId": "STU001",
            "name": "Asha Rao",
            "email": "asha@example.com",
            "mobile": "9876543210",
            "batchId": "B1",
            "active": true,
            "password": "pw",
            "profileComplete": false,
        }))),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
