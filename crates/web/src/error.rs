use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;
use validator::ValidationErrors;

const PROBLEM_BASE: &str = "https://tournaments.example/problems/";

/// Web layer errors, rendered as RFC-7807 problem documents. The
/// `detail` text is shown verbatim to the admin dashboard user.
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    BadRequest(String),
    Unauthorized,
    InvalidStageKind(String),
    InvalidTransition(String),
    InvalidHighlightDuration(i64),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Unauthorized => write!(f, "Unauthorized"),
            Self::InvalidStageKind(msg) => write!(f, "Invalid stage kind: {}", msg),
            Self::InvalidTransition(msg) => write!(f, "Invalid status transition: {}", msg),
            Self::InvalidHighlightDuration(secs) => {
                write!(f, "Invalid highlight duration: {}s", secs)
            }
        }
    }
}

impl WebError {
    /// (status, problem type slug, title, detail)
    fn problem(&self) -> (StatusCode, &'static str, &'static str, String) {
        match self {
            Self::Storage(StorageError::NotFound) => (
                StatusCode::NOT_FOUND,
                "not-found",
                "Resource not found",
                "The requested resource does not exist".to_string(),
            ),
            Self::Storage(StorageError::DuplicateSlug(msg)) => (
                StatusCode::CONFLICT,
                "duplicate-slug",
                "Duplicate slug",
                msg.clone(),
            ),
            Self::Storage(StorageError::ConstraintViolation(msg)) => (
                StatusCode::CONFLICT,
                "conflict",
                "Conflict",
                msg.clone(),
            ),
            Self::Storage(StorageError::InvalidTransition(msg)) => (
                StatusCode::CONFLICT,
                "invalid-status-transition",
                "Invalid status transition",
                msg.clone(),
            ),
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal",
                    "Internal server error",
                    "An internal error occurred".to_string(),
                )
            }
            Self::Validation(errors) => {
                let details: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();
                (
                    StatusCode::BAD_REQUEST,
                    "validation",
                    "Validation failed",
                    details.join("; "),
                )
            }
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "bad-request",
                "Bad request",
                msg.clone(),
            ),
            Self::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "Unauthorized",
                "A valid API key is required".to_string(),
            ),
            Self::InvalidStageKind(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "invalid-stage-kind",
                "Invalid stage kind",
                msg.clone(),
            ),
            Self::InvalidTransition(msg) => (
                StatusCode::CONFLICT,
                "invalid-status-transition",
                "Invalid status transition",
                msg.clone(),
            ),
            Self::InvalidHighlightDuration(secs) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "invalid-highlight-duration",
                "Invalid highlight duration",
                format!("Highlight duration must be 5-3600 seconds, got {secs}"),
            ),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, slug, title, detail) = self.problem();

        let body = json!({
            "type": format!("{PROBLEM_BASE}{slug}"),
            "title": title,
            "status": status.as_u16(),
            "detail": detail,
        });

        (status, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;
