//! Bulk transactional import pipeline.
//!
//! The student, marks, and attendance uploads share one orchestration
//! shape: open a transaction, then for each row in input order run a pure
//! validator against a read-only snapshot of known students and batches,
//! check the row's natural key for an existing record, and insert if both
//! pass. The first hard error aborts the whole upload: the transaction is
//! rolled back and nothing from the submission persists. Duplicates are
//! not errors: they are skipped and counted, which makes re-submitting the
//! same file idempotent.
//!
//! Rows are always processed strictly sequentially so the statement order
//! inside the transaction is deterministic and the first failing row
//! decides the abort point.

pub mod attendance;
pub mod mark;
pub mod student;

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use sea_orm::{ConnectionTrait, DatabaseTransaction, DbErr};

use crate::server::{
    data::{batch::BatchRepository, student::StudentRepository},
    error::{import::ImportError, Error},
};

/// Totals reported by a committed bulk import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Rows written by this upload.
    pub inserted: usize,
    /// Rows whose natural key already existed; treated as no-op successes.
    pub skipped: usize,
}

/// Read-only snapshot of the records a row may reference.
///
/// Loaded once per import, inside the transaction, so the validators stay
/// pure and every row of one upload is checked against the same state.
pub struct ReferenceSnapshot {
    pub students: HashMap<String, entity::student::Model>,
    pub batch_ids: HashSet<String>,
}

impl ReferenceSnapshot {
    pub async fn load<C: ConnectionTrait>(db: &C) -> Result<Self, DbErr> {
        let students = StudentRepository::new(db)
            .get_all()
            .await?
            .into_iter()
            .map(|student| (student.id.clone(), student))
            .collect();

        let batch_ids = BatchRepository::new(db)
            .get_all()
            .await?
            .into_iter()
            .map(|batch| batch.id)
            .collect();

        Ok(Self {
            students,
            batch_ids,
        })
    }
}

/// Rolls back an aborted import and returns the original error.
///
/// A failed rollback is logged but never masks the error that caused the
/// abort.
pub(crate) async fn abort(txn: DatabaseTransaction, err: Error) -> Error {
    if let Err(rollback_err) = txn.rollback().await {
        tracing::error!("Failed to roll back aborted bulk import: {}", rollback_err);
    }

    err
}

/// Returns the trimmed field value, or the missing-data error naming the
/// 1-based row and field.
pub(crate) fn require_field(
    row: usize,
    field: &'static str,
    value: &Option<String>,
) -> Result<String, ImportError> {
    match value.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(ImportError::MissingField { row, field }),
    }
}

pub(crate) fn parse_date(
    row: usize,
    field: &'static str,
    value: &str,
) -> Result<NaiveDate, ImportError> {
    value.parse().map_err(|_| ImportError::InvalidField {
        row,
        field,
        value: value.to_string(),
    })
}

/// Coerces a spreadsheet cell into a boolean. Accepts JSON booleans, 0/1
/// numbers, and the usual string spellings.
pub(crate) fn parse_flag(value: &serde_json::Value) -> Option<bool> {
    match value {
        serde_json::Value::Bool(flag) => Some(*flag),
        serde_json::Value::Number(number) => match number.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        serde_json::Value::String(text) => match text.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Coerces a spreadsheet cell into a numeric score.
pub(crate) fn parse_score(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
