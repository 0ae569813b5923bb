//! packsieve - Blacklist filter plugins for package mirror synchronization.
//!
//! packsieve is the filtering subsystem of a package mirror: it decides,
//! per project and per release, whether an item should be excluded from
//! the mirror based on a `blacklist` section in the host configuration.
//! The host engine builds a [`filters::FilterPipeline`] once per run and
//! consults it for every candidate item; checks are pure, infallible set
//! lookups after the one-time configuration parse.
//!
//! # Modules
//!
//! - [`config`] - Configuration schema and loading
//! - [`error`] - Error types and result aliases
//! - [`filters`] - Filter plugin traits, built-in plugins, registry, pipeline
//! - [`requirement`] - Dependency requirement line parsing
//!
//! # Example
//!
//! ```
//! use packsieve::config::parse_config;
//! use packsieve::filters::FilterPipeline;
//! use std::path::Path;
//!
//! let config = parse_config(
//!     "blacklist:\n  packages: |\n    evil-package\n",
//!     Path::new("mirror.yml"),
//! )
//! .unwrap();
//!
//! let pipeline = FilterPipeline::from_config(&config).unwrap();
//! assert!(pipeline.exclude_project("evil-package"));
//! assert!(!pipeline.exclude_project("requests"));
//! ```
//!
//! For file-based config loading, see the integration tests.

pub mod config;
pub mod error;
pub mod filters;
pub mod requirement;

pub use error::{PacksieveError, Result};
