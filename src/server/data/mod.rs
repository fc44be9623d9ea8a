//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the
//! application, one per table. Repositories are generic over
//! [`sea_orm::ConnectionTrait`] so the same queries run against the shared
//! connection or inside an open transaction (the bulk-import pipeline
//! relies on the latter for its duplicate checks and writes).

pub mod attendance;
pub mod batch;
pub mod interview;
pub mod mark;
pub mod resume_review;
pub mod schedule;
pub mod student;
