use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::version::error::SyncError;

// =============================================================================
// Package layout defaults
// =============================================================================

/// npm package name referenced by the README import example
pub const DEFAULT_PACKAGE_NAME: &str = "@lumina-study/block-schema";

/// Directory (relative to the package root) holding the `v<version>` directories
pub const DEFAULT_SCHEMA_DIR: &str = "schema";

/// File name of the schema inside every version directory
pub const DEFAULT_SCHEMA_FILE_NAME: &str = "block.schema.json";

pub const DEFAULT_README_FILE: &str = "README.md";

pub const DEFAULT_MANIFEST_FILE: &str = "package.json";

/// URL prefix every example's `$schema` must start with
pub const DEFAULT_SCHEMA_ID_BASE: &str =
    "https://raw.githubusercontent.com/lumina-study/block-schema/main/schema/";

/// Layout of the schema package being synchronized
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SyncConfig {
    pub package_name: String,
    pub schema_dir: String,
    pub schema_file_name: String,
    pub readme_file: String,
    pub manifest_file: String,
    pub schema_id_base: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            package_name: DEFAULT_PACKAGE_NAME.to_string(),
            schema_dir: DEFAULT_SCHEMA_DIR.to_string(),
            schema_file_name: DEFAULT_SCHEMA_FILE_NAME.to_string(),
            readme_file: DEFAULT_README_FILE.to_string(),
            manifest_file: DEFAULT_MANIFEST_FILE.to_string(),
            schema_id_base: DEFAULT_SCHEMA_ID_BASE.to_string(),
        }
    }
}

impl SyncConfig {
    /// Load a config file. Missing fields fall back to the defaults.
    pub fn from_file(path: &Path) -> Result<Self, SyncError> {
        let content = std::fs::read_to_string(path).map_err(|e| SyncError::io(path, e))?;
        serde_json::from_str(&content).map_err(|e| SyncError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub fn schema_root(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.schema_dir)
    }

    pub fn readme_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.readme_file)
    }

    pub fn manifest_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.manifest_file)
    }

    /// Manifest-relative path of the schema file for a version directory,
    /// e.g. `./schema/v0.3/block.schema.json`
    pub fn manifest_schema_path(&self, version_dir: &str) -> String {
        format!(
            "./{}/{}/{}",
            self.schema_dir, version_dir, self.schema_file_name
        )
    }
}
