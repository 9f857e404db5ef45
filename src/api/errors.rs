use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::services::monitor_assignment::AssignmentError;
use crate::services::project_queries::QueryError;
use crate::store::StoreError;

#[derive(Debug, Serialize)]
struct ErrorResponse {
    status: u16,
    kind: &'static str,
    detail: String,
}

#[derive(Debug)]
pub(crate) enum ApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    NoEligibleMonitor(String),
    ServiceUnavailable(String),
    PartialWriteFailure(String),
    Internal(String),
}

impl ApiError {
    /// Log the underlying error with context and return an `Internal` variant.
    pub(crate) fn internal(err: impl std::fmt::Display, context: &str) -> Self {
        tracing::error!(error = %err, "{context}");
        Self::Internal(context.to_string())
    }

    /// Maps a failed store call; duplicates become `Conflict`, anything else
    /// is treated as the store being unavailable.
    pub(crate) fn store(err: StoreError, context: &str) -> Self {
        match err {
            StoreError::Conflict(detail) => Self::Conflict(detail),
            other => {
                tracing::warn!(error = %other, "{context}");
                Self::ServiceUnavailable(context.to_string())
            }
        }
    }
}

impl From<AssignmentError> for ApiError {
    fn from(err: AssignmentError) -> Self {
        match err {
            AssignmentError::NoEligibleMonitor { class_id } => {
                Self::NoEligibleMonitor(format!("Class {class_id} has no monitors"))
            }
            AssignmentError::StoreUnavailable(detail) => Self::ServiceUnavailable(detail),
            err @ AssignmentError::PartialWriteFailure { .. } => {
                tracing::error!(error = %err, "Project assignment left a partial write");
                Self::PartialWriteFailure("Project could not be recorded".to_string())
            }
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::StoreUnavailable(err) => Self::store(err, "Failed to fetch projects"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, detail) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, "bad_request", message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, "not_found", message),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, "conflict", message),
            ApiError::NoEligibleMonitor(message) => {
                (StatusCode::CONFLICT, "no_eligible_monitor", message)
            }
            ApiError::ServiceUnavailable(message) => {
                tracing::error!(error = %message, "Service unavailable");
                (StatusCode::SERVICE_UNAVAILABLE, "store_unavailable", message)
            }
            ApiError::PartialWriteFailure(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "partial_write_failure", message)
            }
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal", message)
            }
        };

        (status, Json(ErrorResponse { status: status.as_u16(), kind, detail })).into_response()
    }
}
