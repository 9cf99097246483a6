use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

use super::notification::Notification;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Local precondition failures, rejected before any backend call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backend rejected our credentials (401/403)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Resource not found on the backend
    #[error("Not found: {0}")]
    NotFound(String),

    /// Backend answered with any other non-success status
    #[error("Backend error: {0}")]
    Backend(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Backend answered 2xx but the body could not be read; the write went through
    #[error("Unreadable backend response: {0}")]
    UnreadableResponse(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let notification = Notification::from_error(self);

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "code": status_code.as_u16(),
                "notification": notification,
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Backend(_) => StatusCode::BAD_GATEWAY,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::HttpClient(_) => StatusCode::BAD_GATEWAY,
            AppError::UnreadableResponse(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        AppError::Unauthorized(msg.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        AppError::Backend(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// After a failed mutation, whether the backend may already differ from the
    /// cached collections: the write was committed, or its target is gone
    pub fn leaves_cache_stale(&self) -> bool {
        matches!(self, AppError::UnreadableResponse(_) | AppError::NotFound(_))
    }

    /// Map a non-success upstream status onto the error taxonomy
    pub fn from_status(status: reqwest::StatusCode, context: &str, body: &str) -> Self {
        match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                AppError::Unauthorized(format!("{} rejected with {}", context, status))
            }
            reqwest::StatusCode::NOT_FOUND => AppError::NotFound(context.to_string()),
            _ => AppError::Backend(format!("{} failed with {}: {}", context, status, body)),
        }
    }
}
