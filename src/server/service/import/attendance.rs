use chrono::NaiveDate;
use entity::attendance::AttendanceType;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::{
    model::import::{AttendanceBulkRequest, RawAttendanceRow},
    server::{
        data::{attendance::AttendanceRepository, batch::BatchRepository},
        error::{import::ImportError, Error},
        service::import::{
            abort, parse_date, parse_flag, require_field, ImportSummary, ReferenceSnapshot,
        },
    },
};

/// An attendance row that passed validation, ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAttendance {
    pub student_id: String,
    pub date: NaiveDate,
    pub attendance_type: AttendanceType,
    pub present: bool,
    pub in_time: Option<String>,
    pub out_time: Option<String>,
}

pub struct AttendanceImportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceImportService<'a> {
    /// Creates a new instance of [`AttendanceImportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Imports one month of attendance for one batch as an all-or-nothing
    /// transaction.
    ///
    /// The envelope must carry `batchId`, `month`, and `attendanceData`;
    /// the batch must exist. Rows whose natural key
    /// `(studentId, date, type)` already exists are skipped.
    pub async fn import(&self, request: AttendanceBulkRequest) -> Result<ImportSummary, Error> {
        let (batch_id, rows) = unpack_envelope(request)?;

        let txn = self.db.begin().await?;

        match import_rows(&txn, &batch_id, rows).await {
            Ok(summary) => {
                txn.commit().await?;

                Ok(summary)
            }
            Err(err) => Err(abort(txn, err).await),
        }
    }
}

fn unpack_envelope(
    request: AttendanceBulkRequest,
) -> Result<(String, Vec<RawAttendanceRow>), ImportError> {
    let batch_id = match request.batch_id {
        Some(batch_id) if !batch_id.trim().is_empty() => batch_id,
        _ => return Err(ImportError::MissingEnvelopeField),
    };

    if request.month.as_deref().map(str::trim).unwrap_or("").is_empty() {
        return Err(ImportError::MissingEnvelopeField);
    }

    let rows = request
        .attendance_data
        .ok_or(ImportError::MissingEnvelopeField)?;

    Ok((batch_id, rows))
}

async fn import_rows(
    txn: &DatabaseTransaction,
    batch_id: &str,
    rows: Vec<RawAttendanceRow>,
) -> Result<ImportSummary, Error> {
    let batch_repository = BatchRepository::new(txn);

    if !batch_repository.exists(batch_id).await? {
        return Err(ImportError::UnknownEnvelopeBatch {
            batch_id: batch_id.to_string(),
        }
        .into());
    }

    let snapshot = ReferenceSnapshot::load(txn).await?;
    let attendance_repository = AttendanceRepository::new(txn);

    let mut inserted = 0;
    let mut skipped = 0;

    for (index, row) in rows.iter().enumerate() {
        let record = validate(index + 1, row, &snapshot)?;

        let exists = attendance_repository
            .exists_by_natural_key(&record.student_id, record.date, record.attendance_type)
            .await?;
        if exists {
            skipped += 1;
            continue;
        }

        attendance_repository
            .create(
                record.student_id,
                record.date,
                record.attendance_type,
                record.present,
                record.in_time,
                record.out_time,
            )
            .await?;
        inserted += 1;
    }

    Ok(ImportSummary { inserted, skipped })
}

/// Checks one raw attendance row for shape, types, and a resolvable
/// student reference.
fn validate(
    row_number: usize,
    row: &RawAttendanceRow,
    snapshot: &ReferenceSnapshot,
) -> Result<NormalizedAttendance, ImportError> {
    let student_id = require_field(row_number, "studentId", &row.student_id)?;

    if !snapshot.students.contains_key(&student_id) {
        return Err(ImportError::UnknownStudent {
            row: row_number,
            student_id,
        });
    }

    let date_text = require_field(row_number, "date", &row.date)?;
    let date = parse_date(row_number, "date", &date_text)?;

    let attendance_type = match require_field(row_number, "type", &row.attendance_type)?.as_str() {
        "class" => AttendanceType::Class,
        "lab" => AttendanceType::Lab,
        "hr_session" => AttendanceType::HrSession,
        other => {
            return Err(ImportError::InvalidField {
                row: row_number,
                field: "type",
                value: other.to_string(),
            })
        }
    };

    let present = match &row.present {
        Some(value) => parse_flag(value).ok_or_else(|| ImportError::InvalidField {
            row: row_number,
            field: "present",
            value: value.to_string(),
        })?,
        None => true,
    };

    Ok(NormalizedAttendance {
        student_id,
        date,
        attendance_type,
        present,
        in_time: row.in_time.clone(),
        out_time: row.out_time.clone(),
    })
}
