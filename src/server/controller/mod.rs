//! HTTP controller endpoints for the web API.
//!
//! This module contains Axum handlers for student, batch, schedule, mark,
//! attendance, resume review, and interview management, plus login and the
//! change-event WebSocket. Controllers handle HTTP requests, invoke
//! repositories and services, fire the change notifier after successful
//! mutations, and return appropriate HTTP responses. Endpoints are
//! documented with utoipa.

pub mod attendance;
pub mod auth;
pub mod batch;
pub mod events;
pub mod interview;
pub mod mark;
pub mod resume_review;
pub mod schedule;
pub mod student;
