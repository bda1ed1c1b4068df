//! Application error types with rich context

use thiserror::Error;

use crate::validation::FieldErrors;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Remote Service Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Could not reach consultation service: {message}")]
    Connection { message: String },

    #[error("Consultation service protocol error: {message}")]
    Protocol { message: String },

    #[error("Consultation service rejected {method} ({code}): {message}")]
    Remote {
        method: String,
        code: i32,
        message: String,
    },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,

    // ─────────────────────────────────────────────────────────────
    // Validation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid input: {0}")]
    Validation(#[from] FieldErrors),

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    pub fn remote(method: impl Into<String>, code: i32, message: impl Into<String>) -> Self {
        Self::Remote {
            method: method.into(),
            code,
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    /// True for failures of a single remote call. The session carries on.
    pub fn is_remote_call_error(&self) -> bool {
        matches!(
            self,
            Error::Connection { .. }
                | Error::Protocol { .. }
                | Error::Remote { .. }
                | Error::ChannelClosed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{FormField, ValidationError};

    #[test]
    fn test_error_display_messages() {
        let err = Error::connection("connection refused");
        assert_eq!(
            err.to_string(),
            "Could not reach consultation service: connection refused"
        );

        let err = Error::remote("getVastuRemedies", -32000, "unknown number");
        assert!(err.to_string().contains("getVastuRemedies"));
        assert!(err.to_string().contains("-32000"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_remote_call_classification() {
        assert!(Error::connection("test").is_remote_call_error());
        assert!(Error::protocol("bad frame").is_remote_call_error());
        assert!(Error::remote("bookConsultation", 1, "slot taken").is_remote_call_error());
        assert!(Error::ChannelClosed.is_remote_call_error());
        assert!(!Error::config("bad").is_remote_call_error());
        assert!(!Error::TerminalInit("no tty".into()).is_remote_call_error());
    }

    #[test]
    fn test_validation_error_from_field_errors() {
        let errors = FieldErrors::from(vec![ValidationError::MissingField(FormField::Name)]);
        let err: Error = errors.into();
        assert!(matches!(err, Error::Validation(_)));
        assert!(!err.is_remote_call_error());
        assert!(err.to_string().contains("Name is required"));
    }
}
