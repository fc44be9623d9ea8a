pub mod api;
pub mod attendance;
pub mod auth;
pub mod batch;
pub mod import;
pub mod interview;
pub mod mark;
pub mod resume_review;
pub mod schedule;
pub mod student;
