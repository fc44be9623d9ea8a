use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Row-level failures raised by the bulk-import pipeline.
///
/// Every variant carries the 1-based row number of the offending input row
/// so the admin can locate it in the uploaded file. Any of these errors
/// aborts the entire upload; nothing from the submission is persisted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("Missing data in row {row}: {field} is required")]
    MissingField { row: usize, field: &'static str },
    #[error("Invalid {field} in row {row}: {value:?}")]
    InvalidField {
        row: usize,
        field: &'static str,
        value: String,
    },
    #[error("Invalid reference in row {row}: student with ID {student_id} not found")]
    UnknownStudent { row: usize, student_id: String },
    #[error("Invalid reference in row {row}: batch with ID {batch_id} not found")]
    UnknownBatch { row: usize, batch_id: String },
    #[error(
        "Batch mismatch in row {row}: the file specifies batch {declared} for student \
         {student_id}, but the student belongs to batch {actual}"
    )]
    BatchMismatch {
        row: usize,
        student_id: String,
        declared: String,
        actual: String,
    },
    #[error("Missing batchId, month, or attendanceData")]
    MissingEnvelopeField,
    #[error("Invalid reference: batch with ID {batch_id} not found")]
    UnknownEnvelopeBatch { batch_id: String },
}

impl IntoResponse for ImportError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
