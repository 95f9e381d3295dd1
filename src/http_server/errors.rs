//! # API Errors
//!
//! Every handler fault ends up here. [`ApiError`] is the only place where
//! faults turn into status codes and `{"error": ...}` bodies.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Handler faults
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Create request without `name` or `number`
    #[error("Name and/or number missing")]
    MissingFields,

    /// Body is not a JSON object of the expected shape
    #[error("{0}")]
    InvalidBody(String),

    /// No route matches the request
    #[error("unknown endpoint")]
    UnknownEndpoint,

    // ==================
    // Store Errors
    // ==================
    /// Listing the phonebook failed
    #[error("Couldn't fetch phonebook")]
    PhonebookUnavailable(#[source] StoreError),

    /// Any other store fault
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::UnknownEndpoint => StatusCode::NOT_FOUND,
            ApiError::PhonebookUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Store(err) => match err {
                StoreError::MalformedId(_) => StatusCode::BAD_REQUEST,
                StoreError::Validation(_) => StatusCode::BAD_REQUEST,
                StoreError::DuplicateName(_) => StatusCode::BAD_REQUEST,
                StoreError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
                StoreError::Corrupted(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Message sent to the client
    ///
    /// Server faults get a generic message; details only go to the log.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::MissingFields
            | ApiError::InvalidBody(_)
            | ApiError::UnknownEndpoint
            | ApiError::PhonebookUnavailable(_) => self.to_string(),
            ApiError::Store(err) => match err {
                StoreError::MalformedId(_) => "malformatted id".to_string(),
                StoreError::Validation(validation) => validation.to_string(),
                StoreError::DuplicateName(_) => "Name already in database".to_string(),
                StoreError::Io(_) | StoreError::Corrupted(_) => {
                    "internal server error".to_string()
                }
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::UnknownEndpoint => {}
            ApiError::MissingFields | ApiError::InvalidBody(_) => {
                tracing::warn!(error = %self, "request rejected")
            }
            ApiError::PhonebookUnavailable(source) => {
                tracing::error!(error = %source, "error fetching phonebook")
            }
            ApiError::Store(err) if err.is_client_fault() => {
                tracing::warn!(error = %err, "request rejected")
            }
            ApiError::Store(err) => tracing::error!(error = %err, "request failed"),
        }

        let body = Json(ErrorResponse {
            error: self.client_message(),
        });
        (status, body).into_response()
    }
}
