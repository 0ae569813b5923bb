//! Filter plugins consulted during mirror synchronization.
//!
//! Filters come in two capabilities: project-level filters decide whether a
//! whole project is mirrored, release-level filters decide per version. The
//! host builds a [`FilterPipeline`] once and consults it for every candidate
//! item; any single plugin match excludes the item.
//!
//! - Plugin implementations in [`blacklist_project`] and [`blacklist_release`]
//! - Name-to-constructor table in [`registry`]
//! - Combination of enabled plugins in [`pipeline`]

pub mod blacklist_project;
pub mod blacklist_release;
pub mod pipeline;
pub mod registry;

pub use blacklist_project::ProjectBlacklist;
pub use blacklist_release::ReleaseBlacklist;
pub use pipeline::FilterPipeline;
pub use registry::{FilterRegistry, ProjectFilterFactory, ReleaseFilterFactory};

/// Per-check request for project filters.
///
/// Fields the host doesn't know stay `None`; a check with a missing or
/// empty name never matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectCheck<'a> {
    /// Normalized project name.
    pub name: Option<&'a str>,
}

/// Per-check request for release filters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReleaseCheck<'a> {
    /// Normalized project name.
    pub name: Option<&'a str>,
    /// Release version string.
    pub version: Option<&'a str>,
}

/// Capability interface for project-level filters.
pub trait ProjectFilter: Send + Sync {
    /// Stable plugin name, as listed under `blacklist.plugins`.
    fn name(&self) -> &'static str;

    /// Whether the project should be excluded from the mirror.
    ///
    /// Checks never fail; `true` means "exclude", `false` means "no
    /// opinion".
    fn check_match(&self, check: &ProjectCheck<'_>) -> bool;
}

/// Capability interface for release-level filters.
pub trait ReleaseFilter: Send + Sync {
    /// Stable plugin name, as listed under `blacklist.plugins`.
    fn name(&self) -> &'static str;

    /// Whether the release should be excluded from the mirror.
    fn check_match(&self, check: &ReleaseCheck<'_>) -> bool;
}
