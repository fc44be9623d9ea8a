//! Tests for the service layer.

mod import;
