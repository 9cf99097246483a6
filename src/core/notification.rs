//! User-facing notifications.
//!
//! Every failure that reaches the dashboard boundary is turned into a
//! non-blocking notice. Only validation messages are shown verbatim; backend
//! failures collapse into one fixed message so upstream details never leak
//! into the UI.

use serde::{Deserialize, Serialize};

use super::error::AppError;

pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Warning,
    Error,
}

/// Notice rendered by the dashboard after a failed action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    /// Dashboard should send the user back through sign-in
    pub reauthenticate: bool,
}

impl Notification {
    pub fn from_error(err: &AppError) -> Self {
        match err {
            AppError::Validation(msg) => Self {
                level: NotificationLevel::Warning,
                message: msg.clone(),
                reauthenticate: false,
            },
            AppError::Unauthorized(_) => Self {
                level: NotificationLevel::Error,
                message: SESSION_EXPIRED_MESSAGE.to_string(),
                reauthenticate: true,
            },
            _ => Self {
                level: NotificationLevel::Error,
                message: GENERIC_FAILURE_MESSAGE.to_string(),
                reauthenticate: false,
            },
        }
    }
}
