//! Combination of enabled filter plugins.
//!
//! The host builds one pipeline per synchronization run and consults it for
//! every project and release it considers. A single plugin match is enough
//! to exclude an item.

use crate::config::MirrorConfig;
use crate::error::{PacksieveError, Result};
use crate::filters::registry::FilterRegistry;
use crate::filters::{ProjectCheck, ProjectFilter, ReleaseCheck, ReleaseFilter};
use tracing::debug;

/// The constructed project and release filters for one configuration.
///
/// Filters are built exactly once here; afterwards the pipeline is
/// immutable and safe to share across threads.
pub struct FilterPipeline {
    project_filters: Vec<Box<dyn ProjectFilter>>,
    release_filters: Vec<Box<dyn ReleaseFilter>>,
}

impl std::fmt::Debug for FilterPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterPipeline")
            .field(
                "project_filters",
                &self.project_filters.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .field(
                "release_filters",
                &self.release_filters.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl FilterPipeline {
    /// Build a pipeline with the built-in plugins.
    pub fn from_config(config: &MirrorConfig) -> Result<Self> {
        Self::with_registry(&FilterRegistry::with_builtins(), config)
    }

    /// Build a pipeline from a custom registry.
    ///
    /// The `blacklist.plugins` key selects which registered plugins are
    /// enabled; an absent key enables all of them, an empty list none.
    /// Naming an unregistered plugin is a configuration error.
    pub fn with_registry(registry: &FilterRegistry, config: &MirrorConfig) -> Result<Self> {
        if let Some(names) = config.blacklist.plugins.as_deref() {
            for name in names {
                if !registry.contains(name) {
                    return Err(PacksieveError::UnknownFilter { name: name.clone() });
                }
            }
        }

        let enabled = |name: &str| {
            config
                .blacklist
                .plugins
                .as_deref()
                .map_or(true, |names| names.iter().any(|n| n.as_str() == name))
        };

        let mut project_filters = Vec::new();
        for &(name, factory) in registry.project_factories() {
            if enabled(name) {
                project_filters.push(factory(config)?);
            }
        }

        let mut release_filters = Vec::new();
        for &(name, factory) in registry.release_factories() {
            if enabled(name) {
                release_filters.push(factory(config)?);
            }
        }

        debug!(
            "Filter pipeline enabled {} project filter(s), {} release filter(s)",
            project_filters.len(),
            release_filters.len()
        );
        Ok(Self {
            project_filters,
            release_filters,
        })
    }

    /// Whether any enabled project filter excludes this project.
    pub fn exclude_project(&self, name: &str) -> bool {
        self.check_project(&ProjectCheck { name: Some(name) })
    }

    /// Whether any enabled release filter excludes this release.
    pub fn exclude_release(&self, name: &str, version: &str) -> bool {
        self.check_release(&ReleaseCheck {
            name: Some(name),
            version: Some(version),
        })
    }

    /// Run a project check request through every enabled project filter.
    pub fn check_project(&self, check: &ProjectCheck<'_>) -> bool {
        self.project_filters
            .iter()
            .any(|filter| filter.check_match(check))
    }

    /// Run a release check request through every enabled release filter.
    pub fn check_release(&self, check: &ReleaseCheck<'_>) -> bool {
        self.release_filters
            .iter()
            .any(|filter| filter.check_match(check))
    }

    /// Names of the enabled project filters.
    pub fn project_filter_names(&self) -> Vec<&'static str> {
        self.project_filters.iter().map(|f| f.name()).collect()
    }

    /// Names of the enabled release filters.
    pub fn release_filter_names(&self) -> Vec<&'static str> {
        self.release_filters.iter().map(|f| f.name()).collect()
    }
}
