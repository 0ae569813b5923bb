//! Release-level blacklist filter.
//!
//! Interface-complete placeholder. Matching a release version against the
//! specifier lines that the project filter skips is not implemented yet;
//! the comparison semantics (operator set, how multiple specifiers per
//! package combine) are still undecided, so every check reports no match
//! rather than guessing.

use crate::config::MirrorConfig;
use crate::error::Result;
use crate::filters::{ReleaseCheck, ReleaseFilter};
use tracing::debug;

/// Would exclude individual releases by version specifier; currently never
/// matches.
pub struct ReleaseBlacklist;

impl ReleaseBlacklist {
    /// Plugin name used in the `blacklist.plugins` configuration key.
    pub const NAME: &'static str = "blacklist_release";

    /// Build the filter from the mirror configuration.
    ///
    /// Takes the configuration for signature parity with the other
    /// plugins; nothing is read from it yet.
    pub fn from_config(_config: &MirrorConfig) -> Result<Self> {
        debug!("Initializing the {} plugin", Self::NAME);
        Ok(Self)
    }
}

impl ReleaseFilter for ReleaseBlacklist {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn check_match(&self, check: &ReleaseCheck<'_>) -> bool {
        let (name, version) = match (check.name, check.version) {
            (Some(name), Some(version)) if !name.is_empty() && !version.is_empty() => {
                (name, version)
            }
            _ => return false,
        };

        debug!("Release filtering for {} {} is not implemented", name, version);
        false
    }
}
