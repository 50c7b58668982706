//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {field} is required and must not be empty")]
    MissingField { field: &'static str },

    #[error("Configuration error: {field} must be between 1 and 65535 (got {value})")]
    OutOfRange { field: &'static str, value: i64 },

    #[error("Configuration error: api_prefix must start with '/' (got '{value}')")]
    MalformedPrefix { value: String },

    #[error(
        "Configuration error: user_auth_data must set table, identifier and password together (missing: {})",
        .missing.join(", ")
    )]
    PartialAuthBlock { missing: Vec<&'static str> },

    #[error("Configuration has not been loaded")]
    NotInitialized,

    #[error("Configuration has already been loaded")]
    AlreadyInitialized,

    #[error("Config file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read config file: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// Short machine-readable reason, stable across message wording changes
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "missing-field",
            Self::OutOfRange { .. } => "out-of-range",
            Self::MalformedPrefix { .. } => "malformed-prefix",
            Self::PartialAuthBlock { .. } => "partial-auth-block",
            Self::NotInitialized => "not-initialized",
            Self::AlreadyInitialized => "already-initialized",
            Self::NotFound { .. } => "not-found",
            Self::Read { .. } => "read",
            Self::Parse { .. } => "parse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let err = ConfigError::MissingField {
            field: "db_connection.host",
        };
        assert_eq!(
            err.to_string(),
            "Configuration error: db_connection.host is required and must not be empty"
        );
        assert_eq!(err.kind(), "missing-field");
    }

    #[test]
    fn test_out_of_range_display() {
        let err = ConfigError::OutOfRange {
            field: "http_port",
            value: 70000,
        };
        assert_eq!(
            err.to_string(),
            "Configuration error: http_port must be between 1 and 65535 (got 70000)"
        );
        assert_eq!(err.kind(), "out-of-range");
    }

    #[test]
    fn test_partial_auth_block_display() {
        let err = ConfigError::PartialAuthBlock {
            missing: vec!["identifier", "password"],
        };
        assert!(err.to_string().ends_with("(missing: identifier, password)"));
        assert_eq!(err.kind(), "partial-auth-block");
    }

    #[test]
    fn test_not_initialized_kind() {
        assert_eq!(ConfigError::NotInitialized.kind(), "not-initialized");
        assert_eq!(
            ConfigError::NotInitialized.to_string(),
            "Configuration has not been loaded"
        );
    }

    #[test]
    fn test_read_error_keeps_source() {
        let err = ConfigError::Read {
            path: PathBuf::from("/tmp/silence.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read config file: /tmp/silence.json"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
