//! Application error types with rich context

use thiserror::Error;

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
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Form Schema Wiring Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Unknown form field: {key}")]
    UnknownField { key: String },

    #[error("Duplicate form field in schema: {key}")]
    DuplicateField { key: String },

    #[error("Required field '{key}' is not part of the schema")]
    RequiredFieldMissing { key: String },

    #[error("Field '{key}' expects a {expected} value")]
    FieldKindMismatch { key: String, expected: &'static str },

    // ─────────────────────────────────────────────────────────────
    // Media Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Media could not be encoded: {reason}")]
    Encode { reason: String },

    // ─────────────────────────────────────────────────────────────
    // Network/Backend Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Server rejected request ({status}): {message}")]
    Server { status: u16, message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
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

    pub fn unknown_field(key: impl Into<String>) -> Self {
        Self::UnknownField { key: key.into() }
    }

    pub fn duplicate_field(key: impl Into<String>) -> Self {
        Self::DuplicateField { key: key.into() }
    }

    pub fn required_field_missing(key: impl Into<String>) -> Self {
        Self::RequiredFieldMissing { key: key.into() }
    }

    pub fn field_kind_mismatch(key: impl Into<String>, expected: &'static str) -> Self {
        Self::FieldKindMismatch {
            key: key.into(),
            expected,
        }
    }

    /// Create an [`Error::Encode`] error for media that could not be read or encoded.
    pub fn encode(reason: impl Into<String>) -> Self {
        Self::Encode {
            reason: reason.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Schema wiring defects. These are programming errors, never user input.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::UnknownField { .. }
                | Error::DuplicateField { .. }
                | Error::RequiredFieldMissing { .. }
                | Error::FieldKindMismatch { .. }
        )
    }

    /// Failures a user can retry: media, network and server errors.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Encode { .. } | Error::Network { .. } | Error::Server { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Log an error with context before propagating it
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::network("connection refused");
        assert_eq!(err.to_string(), "Network error: connection refused");

        let err = Error::unknown_field("nickname");
        assert!(err.to_string().contains("nickname"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_schema_errors_are_configuration() {
        assert!(Error::unknown_field("x").is_configuration());
        assert!(Error::duplicate_field("x").is_configuration());
        assert!(Error::required_field_missing("x").is_configuration());
        assert!(Error::field_kind_mismatch("x", "boolean").is_configuration());
        assert!(!Error::network("x").is_configuration());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::encode("dangling handle").is_recoverable());
        assert!(Error::network("dns").is_recoverable());
        assert!(Error::server(422, "bad email").is_recoverable());
        assert!(!Error::duplicate_field("email").is_recoverable());
        assert!(!Error::config_invalid("bad url").is_recoverable());
    }

    #[test]
    fn test_field_kind_mismatch_message() {
        let err = Error::field_kind_mismatch("is_active", "boolean");
        assert_eq!(err.to_string(), "Field 'is_active' expects a boolean value");
    }

    #[test]
    fn test_result_ext_context_preserves_error() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = res.context("reading config").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
