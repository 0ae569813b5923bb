//! Configuration loading and parsing.
//!
//! This module handles the slice of the mirror configuration that the
//! filter plugins consume:
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use packsieve::config::parse_config;
//! use std::path::Path;
//!
//! let config = parse_config(
//!     "blacklist:\n  packages: |\n    evil-package\n",
//!     Path::new("mirror.yml"),
//! )
//! .unwrap();
//! assert!(config.blacklist.packages.is_some());
//! ```

pub mod loader;
pub mod schema;

// Schema re-exports
pub use schema::{BlacklistConfig, MirrorConfig};

// Loader re-exports
pub use loader::{load_config, parse_config};

#[cfg(test)]
mod tests {
    #[test]
    fn serde_yaml_parses_basic_yaml() {
        let yaml = "name: test\nvalue: 42";
        let parsed: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed["name"], "test");
        assert_eq!(parsed["value"], 42);
    }

    #[test]
    fn serde_yaml_preserves_block_scalars() {
        let yaml = "blacklist:\n  packages: |\n    foo\n    bar\n";
        let parsed: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed["blacklist"]["packages"], "foo\nbar\n");
    }
}
