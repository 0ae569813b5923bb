//! Project-level blacklist filter.
//!
//! Excludes whole projects by exact name match against the configured
//! blacklist.

use crate::config::MirrorConfig;
use crate::error::Result;
use crate::filters::{ProjectCheck, ProjectFilter};
use crate::requirement::Requirement;
use std::collections::HashSet;
use tracing::{debug, info};

/// Excludes projects whose name appears in `blacklist.packages`.
///
/// The name set is built once at construction and is immutable afterwards,
/// so the per-item check stays a plain set lookup.
#[derive(Debug)]
pub struct ProjectBlacklist {
    packages: HashSet<String>,
}

impl ProjectBlacklist {
    /// Plugin name used in the `blacklist.plugins` configuration key.
    pub const NAME: &'static str = "blacklist_project";

    /// Build the filter from the mirror configuration.
    ///
    /// Only bare package names feed this filter. Lines with a version
    /// specifier belong to release-level filtering and are skipped; lines
    /// that are more than a bare name (extras, markers, URL references)
    /// are skipped entirely. A line that does not parse as a requirement
    /// fails construction.
    pub fn from_config(config: &MirrorConfig) -> Result<Self> {
        debug!("Initializing the {} plugin", Self::NAME);

        let mut packages = HashSet::new();
        for line in config.blacklist.package_lines() {
            let requirement = Requirement::parse(line)?;
            if !requirement.specifiers.is_empty() {
                debug!("Package line '{}' has a version spec, ignoring", line);
                continue;
            }
            if requirement.name != line {
                debug!(
                    "Package line '{}' is not the bare name '{}', ignoring",
                    line, requirement.name
                );
                continue;
            }
            packages.insert(requirement.name);
        }

        debug!("Project blacklist is {:?}", packages);
        Ok(Self { packages })
    }

    /// Number of blacklisted project names.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Whether the blacklist is empty.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl ProjectFilter for ProjectBlacklist {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn check_match(&self, check: &ProjectCheck<'_>) -> bool {
        let name = match check.name {
            Some(name) if !name.is_empty() => name,
            _ => return false,
        };

        info!("Checking for package {} in the project blacklist", name);
        if self.packages.contains(name) {
            debug!("MATCH: package '{}' is blacklisted", name);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlacklistConfig;
    use crate::error::PacksieveError;

    fn config_with_packages(packages: &str) -> MirrorConfig {
        MirrorConfig {
            blacklist: BlacklistConfig {
                plugins: None,
                packages: Some(packages.to_string()),
            },
        }
    }

    fn check(name: &str) -> ProjectCheck<'_> {
        ProjectCheck { name: Some(name) }
    }

    #[test]
    fn configured_bare_names_match() {
        let filter =
            ProjectBlacklist::from_config(&config_with_packages("evil-package\nanother-bad-one"))
                .unwrap();
        assert!(filter.check_match(&check("evil-package")));
        assert!(filter.check_match(&check("another-bad-one")));
    }

    #[test]
    fn unlisted_names_do_not_match() {
        let filter = ProjectBlacklist::from_config(&config_with_packages("evil-package")).unwrap();
        assert!(!filter.check_match(&check("requests")));
    }

    #[test]
    fn missing_or_empty_name_does_not_match() {
        let filter = ProjectBlacklist::from_config(&config_with_packages("evil-package")).unwrap();
        assert!(!filter.check_match(&ProjectCheck { name: None }));
        assert!(!filter.check_match(&check("")));
    }

    #[test]
    fn specifier_lines_are_reserved_for_release_filtering() {
        let filter = ProjectBlacklist::from_config(&config_with_packages("foo>=1.0")).unwrap();
        assert!(!filter.check_match(&check("foo")));
        assert!(filter.is_empty());
    }

    #[test]
    fn extras_lines_are_dropped() {
        let filter = ProjectBlacklist::from_config(&config_with_packages("foo[extra]")).unwrap();
        assert!(!filter.check_match(&check("foo")));
    }

    #[test]
    fn marker_lines_are_dropped() {
        let filter =
            ProjectBlacklist::from_config(&config_with_packages("foo; python_version < '3.8'"))
                .unwrap();
        assert!(!filter.check_match(&check("foo")));
    }

    #[test]
    fn url_reference_lines_are_dropped() {
        let filter = ProjectBlacklist::from_config(&config_with_packages(
            "foo @ https://example.com/foo.tar.gz",
        ))
        .unwrap();
        assert!(!filter.check_match(&check("foo")));
    }

    #[test]
    fn duplicate_lines_collapse() {
        let filter =
            ProjectBlacklist::from_config(&config_with_packages("foo\nfoo\nfoo")).unwrap();
        assert_eq!(filter.len(), 1);
        assert!(filter.check_match(&check("foo")));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let filter = ProjectBlacklist::from_config(&config_with_packages("Django")).unwrap();
        assert!(filter.check_match(&check("Django")));
        assert!(!filter.check_match(&check("django")));
    }

    #[test]
    fn malformed_line_fails_construction() {
        let err = ProjectBlacklist::from_config(&config_with_packages("good\n>=1.0\nalso-good"))
            .unwrap_err();
        match err {
            PacksieveError::InvalidRequirement { line, .. } => assert_eq!(line, ">=1.0"),
            other => panic!("expected InvalidRequirement, got {:?}", other),
        }
    }

    #[test]
    fn missing_packages_key_builds_empty_filter() {
        let filter = ProjectBlacklist::from_config(&MirrorConfig::default()).unwrap();
        assert!(filter.is_empty());
        assert!(!filter.check_match(&check("anything")));
    }

    #[test]
    fn mixed_configuration_keeps_only_bare_names() {
        let filter =
            ProjectBlacklist::from_config(&config_with_packages("foo\nbar>=2\nbaz[x]\n\n  "))
                .unwrap();
        assert_eq!(filter.len(), 1);
        assert!(filter.check_match(&check("foo")));
        assert!(!filter.check_match(&check("bar")));
        assert!(!filter.check_match(&check("baz")));
        assert!(!filter.check_match(&check("")));
    }
}
