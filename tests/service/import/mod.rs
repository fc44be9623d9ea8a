//! Tests for the bulk transactional import pipeline.
//!
//! The pipeline's contract under test: imports are all-or-nothing (the
//! first invalid row rolls back everything, including rows before it),
//! re-submitting the same file is idempotent (duplicates skip instead of
//! erroring), and referential failures name the offending identifiers.

mod attendance;
mod mark;
mod student;
