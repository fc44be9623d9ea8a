use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use vcube::{model::auth::LoginRequest, server::controller::auth::login};
use vcube_test_utils::prelude::*;

use crate::util::{app_state, TEST_ADMIN_EMAIL, TEST_ADMIN_PASSWORD};

fn request(identifier: &str, credential: &str, role: &str) -> LoginRequest {
    serde_json::from_value(json!({
        "identifier": identifier,
        "credential": credential,
        "role": role,
    }))
    .unwrap()
}

/// Expect 200 for the configured admin credentials
#[tokio::test]
async fn admin_login_succeeds() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Student)?;
    let state = app_state(&test.db);

    let result = login(
        State(state),
        Json(request(TEST_ADMIN_EMAIL, TEST_ADMIN_PASSWORD, "admin")),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 for a wrong admin password
#[tokio::test]
async fn admin_login_rejects_bad_credentials() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Student)?;
    let state = app_state(&test.db);

    let result = login(
        State(state),
        Json(request(TEST_ADMIN_EMAIL, "wrong", "admin")),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 200 when a student logs in with email and mobile
#[tokio::test]
async fn student_login_succeeds() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .with_student("S1", "B1")
        .build()
        .await?;
    let state = app_state(&test.db);

    let result = login(
        State(state),
        Json(request("s1@example.com", "9876543210", "student")),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 when the mobile number does not match
#[tokio::test]
async fn student_login_rejects_bad_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Student)
        .with_student("S1", "B1")
        .build()
        .await?;
    let state = app_state(&test.db);

    let result = login(
        State(state),
        Json(request("s1@example.com", "0000000000", "student")),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
