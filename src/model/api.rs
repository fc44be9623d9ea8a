use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response for operations that report a human-readable outcome,
/// such as bulk uploads and login failures
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    /// The outcome message
    pub message: String,
}

/// The response when a new record was created with a generated identifier
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatedDto {
    /// Identifier of the newly created record
    pub id: String,
}

/// The response for update and delete operations
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ChangesDto {
    /// Number of rows affected
    pub changes: u64,
}
