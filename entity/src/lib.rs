pub mod attendance;
pub mod batch;
pub mod interview;
pub mod mark;
pub mod prelude;
pub mod resume_review;
pub mod schedule;
pub mod student;
