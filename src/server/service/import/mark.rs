use chrono::NaiveDate;
use entity::mark::MarkType;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::import::RawMarkRow,
    server::{
        data::mark::MarkRepository,
        error::{import::ImportError, Error},
        service::import::{
            abort, parse_date, parse_score, require_field, ImportSummary, ReferenceSnapshot,
        },
    },
};

/// A mark row that passed validation, ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMark {
    pub id: String,
    pub student_id: String,
    pub exam: String,
    pub score: f64,
    pub mark_type: MarkType,
    pub date: NaiveDate,
}

pub struct MarkImportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MarkImportService<'a> {
    /// Creates a new instance of [`MarkImportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Imports a parsed mark upload as one all-or-nothing transaction.
    ///
    /// Rows are validated and written strictly in input order. The first
    /// invalid row aborts the whole upload; rows whose natural key
    /// `(studentId, exam, date, type)` already exists are skipped.
    pub async fn import(&self, rows: Vec<RawMarkRow>) -> Result<ImportSummary, Error> {
        let txn = self.db.begin().await?;

        match import_rows(&txn, rows).await {
            Ok(summary) => {
                txn.commit().await?;

                Ok(summary)
            }
            Err(err) => Err(abort(txn, err).await),
        }
    }
}

async fn import_rows(
    txn: &DatabaseTransaction,
    rows: Vec<RawMarkRow>,
) -> Result<ImportSummary, Error> {
    let snapshot = ReferenceSnapshot::load(txn).await?;
    let mark_repository = MarkRepository::new(txn);

    let mut inserted = 0;
    let mut skipped = 0;

    for (index, row) in rows.iter().enumerate() {
        let mark = validate(index + 1, row, &snapshot)?;

        let exists = mark_repository
            .exists_by_natural_key(&mark.student_id, &mark.exam, mark.date, mark.mark_type)
            .await?;
        if exists {
            skipped += 1;
            continue;
        }

        mark_repository
            .create(
                mark.id,
                mark.student_id,
                mark.exam,
                mark.score,
                mark.mark_type,
                mark.date,
            )
            .await?;
        inserted += 1;
    }

    Ok(ImportSummary { inserted, skipped })
}

/// Checks one raw mark row for shape, types, and references.
///
/// `row_number` is 1-based and only used for error reporting. The student
/// must exist and the batch declared in the file must equal the student's
/// actual batch.
fn validate(
    row_number: usize,
    row: &RawMarkRow,
    snapshot: &ReferenceSnapshot,
) -> Result<NormalizedMark, ImportError> {
    let student_id = require_field(row_number, "studentId", &row.student_id)?;
    let batch_id = require_field(row_number, "batchId", &row.batch_id)?;

    let student = snapshot
        .students
        .get(&student_id)
        .ok_or_else(|| ImportError::UnknownStudent {
            row: row_number,
            student_id: student_id.clone(),
        })?;

    if student.batch_id != batch_id {
        return Err(ImportError::BatchMismatch {
            row: row_number,
            student_id,
            declared: batch_id,
            actual: student.batch_id.clone(),
        });
    }

    let exam = require_field(row_number, "exam", &row.exam)?;

    let score = match &row.score {
        Some(value) => parse_score(value).ok_or_else(|| ImportError::InvalidField {
            row: row_number,
            field: "score",
            value: value.to_string(),
        })?,
        None => {
            return Err(ImportError::MissingField {
                row: row_number,
                field: "score",
            })
        }
    };

    let mark_type = match require_field(row_number, "type", &row.mark_type)?.as_str() {
        "exam" => MarkType::Exam,
        "mock" => MarkType::Mock,
        other => {
            return Err(ImportError::InvalidField {
                row: row_number,
                field: "type",
                value: other.to_string(),
            })
        }
    };

    let date_text = require_field(row_number, "date", &row.date)?;
    let date = parse_date(row_number, "date", &date_text)?;

    let id = match &row.id {
        Some(id) if !id.trim().is_empty() => id.trim().to_string(),
        _ => Uuid::new_v4().to_string(),
    };

    Ok(NormalizedMark {
        id,
        student_id,
        exam,
        score,
        mark_type,
        date,
    })
}
