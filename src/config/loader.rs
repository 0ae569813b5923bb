//! Configuration file loading.
//!
//! The host mirror engine owns configuration discovery; this loader only
//! reads and parses a file at a path the host already resolved.

use crate::config::schema::MirrorConfig;
use crate::error::{PacksieveError, Result};
use std::fs;
use std::path::Path;

/// Load and parse a mirror configuration file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(path: &Path) -> Result<MirrorConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PacksieveError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PacksieveError::Io(e)
        }
    })?;

    serde_yaml::from_str(&content).map_err(|e| PacksieveError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parse a mirror configuration from an in-memory string.
///
/// Used by hosts that load configuration themselves and by tests. The
/// `source_path` only labels parse errors.
pub fn parse_config(content: &str, source_path: &Path) -> Result<MirrorConfig> {
    serde_yaml::from_str(content).map_err(|e| PacksieveError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
