//! Error types for the server application.
//!
//! This module provides the error handling system for the backend, with
//! specialized error types per domain (configuration, bulk import) and a
//! unified [`Error`] enum aggregating them together with external library
//! errors. All errors implement `IntoResponse` for Axum HTTP responses and
//! use `thiserror` for ergonomic error definitions.

pub mod config;
pub mod import;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, import::ImportError},
};

/// Main error type for the server application.
///
/// Aggregates the domain-specific error types and external library errors
/// into a single unified error type, using `thiserror`'s `#[from]`
/// attribute for automatic conversion via the `?` operator. The
/// `IntoResponse` implementation maps errors to HTTP responses.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Bulk-import row error (malformed row, unresolvable reference,
    /// batch mismatch). Always aborts the whole upload.
    #[error(transparent)]
    ImportError(#[from] ImportError),
    /// Database error (query failures, connection issues, constraint
    /// violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

/// Converts application errors into HTTP responses.
///
/// Import errors surface their full message to the admin UI with a 400
/// status; everything else is treated as an internal server error with
/// logging and a generic message.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::ImportError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the error message and returns a generic "Internal server error"
/// message to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
