//! HTTP error type. Every failure leaves the server as `{"error": "..."}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mm_store::StoreError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{context}: {source}")]
    Internal {
        context: &'static str,
        #[source]
        source: StoreError,
    },

    /// The blocking task running a store call panicked or was cancelled.
    #[error("{context}: {source}")]
    Task {
        context: &'static str,
        #[source]
        source: tokio::task::JoinError,
    },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    /// Map a store failure, using `context` as the public message for
    /// backend faults.
    pub fn from_store(context: &'static str, err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            StoreError::DuplicateKeyword(_) => ApiError::Conflict(err.to_string()),
            StoreError::NotOwner { .. } => ApiError::Forbidden(err.to_string()),
            StoreError::InvalidEmail(_) => {
                ApiError::BadRequest("Valid email address is required".into())
            }
            StoreError::Blank(_)
            | StoreError::UnknownCluster(_)
            | StoreError::UnknownRecord { .. } => ApiError::BadRequest(err.to_string()),
            StoreError::IdsExhausted(_) | StoreError::Io { .. } | StoreError::Json { .. } => {
                ApiError::Internal { context, source: err }
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal { .. } | ApiError::Task { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Internal { context, source } => {
                tracing::error!(error = %source, "{context}");
                context.to_string()
            }
            ApiError::Task { context, source } => {
                tracing::error!(error = %source, "{context}: store task failed");
                context.to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Attach a public failure message to store results.
pub trait StoreContext<T> {
    fn context(self, context: &'static str) -> Result<T, ApiError>;
}

impl<T> StoreContext<T> for mm_store::Result<T> {
    fn context(self, context: &'static str) -> Result<T, ApiError> {
        self.map_err(|err| ApiError::from_store(context, err))
    }
}
