use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use uuid::Uuid;

use crate::{
    model::{import::RawStudentRow, student::SaveStudentDto},
    server::{
        data::student::StudentRepository,
        error::{import::ImportError, Error},
        service::import::{abort, parse_flag, require_field, ImportSummary, ReferenceSnapshot},
    },
};

pub struct StudentImportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentImportService<'a> {
    /// Creates a new instance of [`StudentImportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Imports a parsed student registration sheet as one all-or-nothing
    /// transaction.
    ///
    /// Unlike marks and attendance there is no skip-on-duplicate here: a
    /// row colliding with an existing record id or external student id is
    /// a constraint violation that aborts the upload.
    pub async fn import(&self, rows: Vec<RawStudentRow>) -> Result<ImportSummary, Error> {
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
    rows: Vec<RawStudentRow>,
) -> Result<ImportSummary, Error> {
    let snapshot = ReferenceSnapshot::load(txn).await?;
    let student_repository = StudentRepository::new(txn);

    let mut inserted = 0;

    for (index, row) in rows.iter().enumerate() {
        let (id, student) = validate(index + 1, row, &snapshot)?;

        student_repository.create(id, student).await?;
        inserted += 1;
    }

    Ok(ImportSummary {
        inserted,
        skipped: 0,
    })
}

/// Checks one raw student row for shape and a resolvable batch reference.
fn validate(
    row_number: usize,
    row: &RawStudentRow,
    snapshot: &ReferenceSnapshot,
) -> Result<(String, SaveStudentDto), ImportError> {
    let student_id = require_field(row_number, "studentId", &row.student_id)?;
    let name = require_field(row_number, "name", &row.name)?;
    let email = require_field(row_number, "email", &row.email)?;
    let mobile = require_field(row_number, "mobile", &row.mobile)?;
    let batch_id = require_field(row_number, "batchId", &row.batch_id)?;

    if !snapshot.batch_ids.contains(&batch_id) {
        return Err(ImportError::UnknownBatch {
            row: row_number,
            batch_id,
        });
    }

    let active = parse_optional_flag(row_number, "active", &row.active, true)?;
    let profile_complete =
        parse_optional_flag(row_number, "profileComplete", &row.profile_complete, false)?;

    let id = match &row.id {
        Some(id) if !id.trim().is_empty() => id.trim().to_string(),
        _ => Uuid::new_v4().to_string(),
    };

    let student = SaveStudentDto {
        id: None,
        student_id,
        name,
        email,
        mobile,
        batch_id,
        active,
        photo: row.photo.clone().unwrap_or_default(),
        password: row.password.clone().unwrap_or_default(),
        profile_complete,
        education: row.education.clone(),
    };

    Ok((id, student))
}

fn parse_optional_flag(
    row: usize,
    field: &'static str,
    value: &Option<serde_json::Value>,
    default: bool,
) -> Result<bool, ImportError> {
    match value {
        Some(value) => parse_flag(value).ok_or_else(|| ImportError::InvalidField {
            row,
            field,
            value: value.to_string(),
        }),
        None => Ok(default),
    }
}
