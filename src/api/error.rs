//! HTTP-facing error type.
//!
//! Every failure becomes `{"error": "<message>"}` with a fixed, generic
//! message per kind. The underlying detail is logged, never returned.

use crate::enrichment::EnrichmentError;
use crate::person_actor::PersonError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed body, path or query.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Enrichment(#[from] EnrichmentError),

    #[error("Storage failure: {0}")]
    Storage(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Enrichment(_) | ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "Invalid input",
            ApiError::NotFound(_) => "Person not found",
            ApiError::Enrichment(_) => "Failed to enrich person data",
            ApiError::Storage(_) => "Failed to access person storage",
        }
    }
}

impl From<PersonError> for ApiError {
    fn from(e: PersonError) -> Self {
        match e {
            PersonError::NotFound(id) => ApiError::NotFound(id),
            PersonError::StorageError(msg) => ApiError::Storage(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }
        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}
