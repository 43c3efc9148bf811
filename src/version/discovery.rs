//! Discovery of `v<version>` schema directories

use std::path::Path;

use crate::version::error::SyncError;
use crate::version::segments::{Segment, compare_segments, parse_segments};

/// One schema version directory found under the schema root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEntry {
    /// Directory name, always `"v" + version`
    pub dir_name: String,
    /// Version without the `v` prefix (e.g. "0.3")
    pub version: String,
    /// Numeric segments of `version`; a non-numeric segment counts as zero
    pub segments: Vec<Segment>,
}

impl VersionEntry {
    /// Build an entry from a directory name like `v0.3`.
    ///
    /// Returns None when the name has no `v` prefix.
    pub fn from_dir_name(dir_name: &str) -> Option<Self> {
        let version = dir_name.strip_prefix('v')?;
        let segments = parse_segments(version);
        Some(Self {
            dir_name: dir_name.to_string(),
            version: version.to_string(),
            segments,
        })
    }
}

/// List every version directory under `schema_root`, highest first.
///
/// Entries that compare equal keep their directory listing order.
pub fn discover_versions(schema_root: &Path) -> Result<Vec<VersionEntry>, SyncError> {
    let read_dir = std::fs::read_dir(schema_root).map_err(|e| SyncError::io(schema_root, e))?;

    let mut versions = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| SyncError::io(schema_root, e))?;
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if !name.starts_with('v') {
            continue;
        }

        // Follows symlinks so a linked version directory still counts
        let path = entry.path();
        let metadata = std::fs::metadata(&path).map_err(|e| SyncError::io(&path, e))?;
        if !metadata.is_dir() {
            continue;
        }

        if let Some(version) = VersionEntry::from_dir_name(&name) {
            versions.push(version);
        }
    }

    versions.sort_by(|a, b| compare_segments(&b.segments, &a.segments));
    Ok(versions)
}

/// Find the highest version directory under `schema_root`.
///
/// Returns `Ok(None)` when the schema root has no version directories.
pub fn latest_version(schema_root: &Path) -> Result<Option<VersionEntry>, SyncError> {
    Ok(discover_versions(schema_root)?.into_iter().next())
}
