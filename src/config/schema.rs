//! Configuration schema definitions.
//!
//! This module contains the struct definitions that map to the mirror
//! configuration file. Only the `blacklist` section is modeled here; the
//! rest of the host configuration is opaque to the filter plugins.

use serde::{Deserialize, Serialize};

/// Root of the mirror configuration as seen by the filter plugins.
///
/// A configuration without a `blacklist` section is valid and means no
/// filtering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MirrorConfig {
    /// Blacklist section
    pub blacklist: BlacklistConfig,
}

/// The `blacklist` configuration section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BlacklistConfig {
    /// Names of the filter plugins to enable. Absent means all built-in
    /// plugins; an explicitly empty list disables filtering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<String>>,

    /// Newline-separated requirement lines. Bare names feed the project
    /// filter; lines with version specifiers are reserved for release
    /// filtering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packages: Option<String>,
}

impl BlacklistConfig {
    /// Iterate over the trimmed, non-empty package lines.
    pub fn package_lines(&self) -> impl Iterator<Item = &str> {
        self.packages
            .as_deref()
            .unwrap_or("")
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}
