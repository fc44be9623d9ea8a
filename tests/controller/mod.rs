//! Tests for HTTP controller endpoints.
//!
//! These call the Axum handlers directly, verifying status codes, database
//! side effects, and that the change notifier fires only after committed
//! mutations.

mod auth;
mod mark;
mod student;
