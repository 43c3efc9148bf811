//! Points the README and package.json at the newest schema version

use std::path::Path;

use tracing::{info, warn};

use crate::config::SyncConfig;
use crate::update::{UpdateOutcome, update_manifest, update_readme};
use crate::version::discovery::{VersionEntry, latest_version};
use crate::version::error::SyncError;

/// What a sync run found and changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Highest version directory discovered
    pub latest: VersionEntry,
    /// Manifest-relative schema path both artifacts now reference
    pub schema_path: String,
    pub readme: UpdateOutcome,
    pub manifest: UpdateOutcome,
}

impl SyncReport {
    /// True when at least one artifact was rewritten
    pub fn changed(&self) -> bool {
        self.readme.is_updated() || self.manifest.is_updated()
    }
}

/// Discover the newest schema version and update the README, then package.json.
///
/// Returns `Ok(None)` without writing anything when no version directory exists.
/// A failure after the README was written leaves it updated.
pub fn sync(base_dir: &Path, config: &SyncConfig) -> Result<Option<SyncReport>, SyncError> {
    let Some(latest) = latest_version(&config.schema_root(base_dir))? else {
        warn!("No schema versions found in {:?}", config.schema_root(base_dir));
        return Ok(None);
    };

    info!("Found latest schema version: {}", latest.dir_name);
    let readme = update_readme(base_dir, &latest.version, config)?;
    let manifest = update_manifest(base_dir, &latest.dir_name, config)?;

    Ok(Some(SyncReport {
        schema_path: config.manifest_schema_path(&latest.dir_name),
        latest,
        readme,
        manifest,
    }))
}
