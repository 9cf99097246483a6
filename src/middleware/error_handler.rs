//! Extractor error handlers.
//!
//! Malformed bodies and query strings are reported in the same notification
//! shape as every other failure instead of actix's plain-text defaults.

use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError},
    web, Error, HttpRequest,
};

use super::request_id::request_id;
use crate::core::AppError;

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    log_error(req, &err);
    AppError::validation(format!("Invalid request body: {}", err)).into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    log_error(req, &err);
    AppError::validation(format!("Invalid query parameters: {}", err)).into()
}

pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    log_error(req, &err);
    AppError::validation(format!("Invalid path: {}", err)).into()
}

pub fn log_error(req: &HttpRequest, err: &dyn std::fmt::Display) {
    tracing::warn!(
        request_id = %request_id(req).unwrap_or_else(|| "-".to_string()),
        method = %req.method(),
        path = %req.path(),
        error = %err,
        "Rejected malformed request"
    );
}

/// Registers the handlers above on an app or scope
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler));
}
