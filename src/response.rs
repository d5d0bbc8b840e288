use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error value carrying a human-readable message and a status code
/// classifying the failure (HTTP semantics, e.g. 404 or 503).
///
/// Both fields are mutable after construction: a boundary handler that
/// catches the value may reclassify it before rendering. `Display`
/// always shows the current message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[error("{message}")]
pub struct ErrorResponse {
    /// Human-readable error message
    message: String,
    /// Status code classifying the failure
    status_code: u16,
}

impl ErrorResponse {
    /// Create a new error with the given message and status code.
    ///
    /// Any message (including empty) and any code (including values
    /// outside the HTTP range) are accepted; construction cannot fail.
    pub fn new(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code,
        }
    }

    /// Get the current status code.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Replace the status code. The message is left untouched.
    pub fn set_status_code(&mut self, status_code: u16) {
        self.status_code = status_code;
    }

    /// Get the current message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replace the message. Subsequent `Display` output shows the new
    /// text; the status code is left untouched.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }
}

/// Helpers for creating common errors
impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, 400)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(message, 401)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message, 404)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(message, 500)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(message, 503)
    }
}
