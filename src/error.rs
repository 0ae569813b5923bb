//! Error types for packsieve operations.
//!
//! This module defines [`PacksieveError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PacksieveError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PacksieveError::Other`) for unexpected errors
//! - Filter construction is all-or-nothing: the first bad requirement line
//!   aborts initialization
//! - Per-item checks never fail; missing fields simply do not match

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for packsieve operations.
#[derive(Debug, Error)]
pub enum PacksieveError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A blacklist line is not a valid dependency requirement.
    #[error("Invalid requirement line '{line}': {message}")]
    InvalidRequirement { line: String, message: String },

    /// Configuration enables a filter plugin that is not registered.
    #[error("Unknown filter plugin: {name}")]
    UnknownFilter { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for packsieve operations.
pub type Result<T> = std::result::Result<T, PacksieveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = PacksieveError::ConfigNotFound {
            path: PathBuf::from("/etc/mirror.yml"),
        };
        assert!(err.to_string().contains("/etc/mirror.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = PacksieveError::ConfigParseError {
            path: PathBuf::from("/mirror.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/mirror.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn invalid_requirement_displays_line_and_message() {
        let err = PacksieveError::InvalidRequirement {
            line: ">=1.0".into(),
            message: "missing package name".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains(">=1.0"));
        assert!(msg.contains("missing package name"));
    }

    #[test]
    fn unknown_filter_displays_name() {
        let err = PacksieveError::UnknownFilter {
            name: "whitelist_project".into(),
        };
        assert!(err.to_string().contains("whitelist_project"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PacksieveError = io_err.into();
        assert!(matches!(err, PacksieveError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(PacksieveError::UnknownFilter {
                name: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
