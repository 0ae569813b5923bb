//! Filter plugin registry.
//!
//! Maps stable plugin names to constructors. The pipeline resolves the
//! `blacklist.plugins` configuration key against this table; hosts can
//! register their own plugins alongside the built-ins.

use crate::config::MirrorConfig;
use crate::error::Result;
use crate::filters::{ProjectBlacklist, ProjectFilter, ReleaseBlacklist, ReleaseFilter};

/// Constructor for a project-level filter plugin.
pub type ProjectFilterFactory = fn(&MirrorConfig) -> Result<Box<dyn ProjectFilter>>;

/// Constructor for a release-level filter plugin.
pub type ReleaseFilterFactory = fn(&MirrorConfig) -> Result<Box<dyn ReleaseFilter>>;

/// Registry of all known filter plugins, in registration order.
pub struct FilterRegistry {
    project_filters: Vec<(&'static str, ProjectFilterFactory)>,
    release_filters: Vec<(&'static str, ReleaseFilterFactory)>,
}

impl FilterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            project_filters: Vec::new(),
            release_filters: Vec::new(),
        }
    }

    /// Create a registry with the built-in blacklist plugins.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_project(ProjectBlacklist::NAME, |config| {
            Ok(Box::new(ProjectBlacklist::from_config(config)?))
        });
        registry.register_release(ReleaseBlacklist::NAME, |config| {
            Ok(Box::new(ReleaseBlacklist::from_config(config)?))
        });
        registry
    }

    /// Register a project-level filter plugin.
    pub fn register_project(&mut self, name: &'static str, factory: ProjectFilterFactory) {
        self.project_filters.push((name, factory));
    }

    /// Register a release-level filter plugin.
    pub fn register_release(&mut self, name: &'static str, factory: ReleaseFilterFactory) {
        self.release_filters.push((name, factory));
    }

    /// Check if a plugin name is registered, at either level.
    pub fn contains(&self, name: &str) -> bool {
        self.project_filters.iter().any(|&(n, _)| n == name)
            || self.release_filters.iter().any(|&(n, _)| n == name)
    }

    /// All registered plugin names.
    pub fn known_names(&self) -> Vec<&'static str> {
        self.project_filters
            .iter()
            .map(|&(n, _)| n)
            .chain(self.release_filters.iter().map(|&(n, _)| n))
            .collect()
    }

    pub(crate) fn project_factories(&self) -> &[(&'static str, ProjectFilterFactory)] {
        &self.project_filters
    }

    pub(crate) fn release_factories(&self) -> &[(&'static str, ReleaseFilterFactory)] {
        &self.release_filters
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
