//! Custom error types for restdesk
//!
//! This module defines the crate-wide error hierarchy using thiserror.
//! The wizard keeps its own narrower error types (see `wizard::error`)
//! which convert into this one at the front-end boundary.

use thiserror::Error;

/// The main error type for restdesk operations
#[derive(Error, Debug)]
pub enum RestdeskError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Client-side form validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Attachment encoding errors
    #[error("Upload error: {0}")]
    Upload(String),

    /// Value already in use (usernames, websites)
    #[error("{field} \"{value}\" has been used")]
    Duplicate { field: &'static str, value: String },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Non-success HTTP status from the API
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Transport-level failures (DNS, connect, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Wizard submission failures
    #[error("Submission failed: {0}")]
    Submission(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl RestdeskError {
    /// Create a "not found" error for posts
    pub fn post_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Post",
            identifier: identifier.into(),
        }
    }

    /// Build an HTTP error with the friendly message for its status code
    pub fn http(status: u16, reason: &str) -> Self {
        Self::Http {
            status,
            message: crate::api::status::user_message(status, reason),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error was raised before any request was sent
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Upload(_) | Self::Duplicate { .. }
        )
    }

    /// HTTP status code, if the error came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RestdeskError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RestdeskError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for RestdeskError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            let reason = status.canonical_reason().unwrap_or("Unknown");
            return Self::http(status.as_u16(), reason);
        }
        if err.is_decode() {
            return Self::Json(err.to_string());
        }
        Self::Network(err.to_string())
    }
}

/// Result type alias for restdesk operations
pub type RestdeskResult<T> = Result<T, RestdeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RestdeskError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_duplicate_error() {
        let err = RestdeskError::Duplicate {
            field: "username",
            value: "Bret".into(),
        };
        assert_eq!(err.to_string(), "username \"Bret\" has been used");
        assert!(err.is_local());
    }

    #[test]
    fn test_http_error_uses_friendly_message() {
        let err = RestdeskError::http(403, "Forbidden");
        assert_eq!(err.to_string(), "You don't have permission to create posts.");
        assert_eq!(err.status(), Some(403));
        assert!(!err.is_local());
    }

    #[test]
    fn test_not_found_error() {
        let err = RestdeskError::post_not_found("101");
        assert_eq!(err.to_string(), "Post not found: 101");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RestdeskError = io_err.into();
        assert!(matches!(err, RestdeskError::Io(_)));
    }
}
