//! package.json entry point update

use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::config::SyncConfig;
use crate::update::UpdateOutcome;
use crate::version::error::SyncError;

/// Serialize a manifest with 2-space indentation and a single trailing newline.
pub fn to_manifest_string(manifest: &Value) -> Result<String, serde_json::Error> {
    let mut output = serde_json::to_string_pretty(manifest)?;
    output.push('\n');
    Ok(output)
}

/// Point `main` and `exports["."]` at `schema_path`.
///
/// Returns false without touching the manifest when both already match.
/// Every other field and export alias keeps its value and position.
pub fn patch_manifest(manifest: &mut Map<String, Value>, schema_path: &str) -> Result<bool, String> {
    let main_current = manifest.get("main").and_then(Value::as_str) == Some(schema_path);

    let Value::Object(exports) = manifest
        .entry("exports")
        .or_insert_with(|| Value::Object(Map::new()))
    else {
        return Err("\"exports\" is not an object".to_string());
    };

    let export_current = exports.get(".").and_then(Value::as_str) == Some(schema_path);
    if main_current && export_current {
        return Ok(false);
    }

    exports.insert(".".to_string(), Value::String(schema_path.to_string()));
    manifest.insert("main".to_string(), Value::String(schema_path.to_string()));
    Ok(true)
}

/// Point the manifest at the schema file inside `version_dir` (e.g. `v0.3`).
pub fn update_manifest(
    base_dir: &Path,
    version_dir: &str,
    config: &SyncConfig,
) -> Result<UpdateOutcome, SyncError> {
    let manifest_path = config.manifest_path(base_dir);
    let content = std::fs::read_to_string(&manifest_path)
        .map_err(|e| SyncError::io(&manifest_path, e))?;
    let mut manifest: Value =
        serde_json::from_str(&content).map_err(|e| SyncError::json(&manifest_path, e))?;

    let Value::Object(fields) = &mut manifest else {
        return Err(SyncError::InvalidManifest {
            path: manifest_path,
            reason: "root is not an object".to_string(),
        });
    };

    let schema_path = config.manifest_schema_path(version_dir);
    let changed = patch_manifest(fields, &schema_path).map_err(|reason| {
        SyncError::InvalidManifest {
            path: manifest_path.clone(),
            reason,
        }
    })?;

    if !changed {
        info!(
            "{} already points to: {}",
            config.manifest_file, schema_path
        );
        return Ok(UpdateOutcome::UpToDate);
    }

    let output = to_manifest_string(&manifest).map_err(|e| SyncError::json(&manifest_path, e))?;
    debug!("Writing {} bytes to {:?}", output.len(), manifest_path);
    std::fs::write(&manifest_path, output).map_err(|e| SyncError::io(&manifest_path, e))?;
    info!(
        "Updated {} main export to: {}",
        config.manifest_file, schema_path
    );

    Ok(UpdateOutcome::Updated)
}
