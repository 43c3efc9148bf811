//! README version marker update
//!
//! Two markers are kept on the newest version:
//! - `- **v0.3** (Recommended)` in the version guide
//! - `import blockSchema from '<package>' // v0.3 (default for stability)` in the usage snippet

use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::info;

use crate::config::SyncConfig;
use crate::update::UpdateOutcome;
use crate::version::error::SyncError;

static RECOMMENDED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(- \*\*v)[0-9.]+(\*\* \(Recommended\))").unwrap());

fn default_import_pattern(package_name: &str) -> String {
    format!(
        r"(import blockSchema from '{}' // v)[0-9.]+( \(default for stability\))",
        regex::escape(package_name)
    )
}

/// Replace the version between the two capture groups of the first match.
///
/// Returns None if the pattern is absent or the replacement changes nothing.
fn replace_marker(content: &str, pattern: &Regex, version: &str) -> Option<String> {
    let replaced = pattern.replace(content, |caps: &Captures| {
        format!("{}{}{}", &caps[1], version, &caps[2])
    });
    (replaced != content).then(|| replaced.into_owned())
}

/// Apply both marker substitutions to README text.
///
/// Returns the new text, or None when the text already references `version`.
/// Fails if the import pattern for `package_name` cannot be built.
pub fn patch_readme(
    content: &str,
    version: &str,
    package_name: &str,
) -> Result<Option<String>, regex::Error> {
    let default_import = Regex::new(&default_import_pattern(package_name))?;

    let mut updated = false;
    let mut content = content.to_string();
    if let Some(new_content) = replace_marker(&content, &RECOMMENDED, version) {
        content = new_content;
        updated = true;
    }
    if let Some(new_content) = replace_marker(&content, &default_import, version) {
        content = new_content;
        updated = true;
    }

    Ok(updated.then_some(content))
}

/// Point the README markers at `version` (given without the `v` prefix).
///
/// The file is left byte-for-byte untouched when it is already current.
pub fn update_readme(
    base_dir: &Path,
    version: &str,
    config: &SyncConfig,
) -> Result<UpdateOutcome, SyncError> {
    let readme_path = config.readme_path(base_dir);
    let content =
        std::fs::read_to_string(&readme_path).map_err(|e| SyncError::io(&readme_path, e))?;

    match patch_readme(&content, version, &config.package_name)? {
        Some(new_content) => {
            std::fs::write(&readme_path, new_content)
                .map_err(|e| SyncError::io(&readme_path, e))?;
            info!(
                "Updated {} with latest version: v{}",
                config.readme_file, version
            );
            Ok(UpdateOutcome::Updated)
        }
        None => {
            info!(
                "{} already up to date with v{}",
                config.readme_file, version
            );
            Ok(UpdateOutcome::UpToDate)
        }
    }
}
