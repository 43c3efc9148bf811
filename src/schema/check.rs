//! Conventions every schema package must follow
//!
//! - every `*.schema.json` carries the metadata fields and compiles
//! - every `example*.json` names its hosted schema in `$schema` and validates
//!   against the schema file in the same version directory

use std::path::{Path, PathBuf};

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::config::SyncConfig;
use crate::version::error::SyncError;

/// Fields every schema file must declare
pub const REQUIRED_SCHEMA_FIELDS: [&str; 5] = ["$schema", "$id", "title", "description", "version"];

/// A file that broke a convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub schemas_checked: usize,
    pub examples_checked: usize,
    pub failures: Vec<CheckFailure>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

fn is_schema_file(name: &str) -> bool {
    name.ends_with(".schema.json")
}

fn is_example_file(name: &str) -> bool {
    name.starts_with("example") && name.ends_with(".json")
}

/// Collect files under `dir` (recursively) whose name satisfies `matches`, sorted by path.
///
/// Symlinked directories are not descended into, so a link back to an
/// ancestor cannot loop the walk.
fn find_files(dir: &Path, matches: fn(&str) -> bool) -> Result<Vec<PathBuf>, SyncError> {
    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let read_dir = std::fs::read_dir(&current).map_err(|e| SyncError::io(&current, e))?;
        for entry in read_dir {
            let entry = entry.map_err(|e| SyncError::io(&current, e))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| SyncError::io(&path, e))?;
            if file_type.is_dir() {
                pending.push(path);
            } else if file_type.is_symlink() && path.is_dir() {
                debug!("Skipping symlinked directory {:?}", path);
            } else if entry.file_name().to_str().is_some_and(matches) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

fn read_json(path: &Path) -> Result<Value, String> {
    let content = std::fs::read_to_string(path).map_err(|e| format!("unreadable: {e}"))?;
    serde_json::from_str(&content).map_err(|e| format!("invalid JSON: {e}"))
}

fn compile(schema: &Value) -> Result<jsonschema::Validator, String> {
    jsonschema::validator_for(schema).map_err(|e| format!("schema does not compile: {e}"))
}

fn check_schema(path: &Path) -> Result<(), String> {
    let schema = read_json(path)?;

    let missing: Vec<&str> = REQUIRED_SCHEMA_FIELDS
        .iter()
        .copied()
        .filter(|field| schema.get(field).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(format!("missing required fields: {}", missing.join(", ")));
    }

    compile(&schema).map(|_| ())
}

fn check_example(path: &Path, schema_file_name: &str, schema_url: &Regex) -> Result<(), String> {
    let example = read_json(path)?;

    match example.get("$schema").and_then(Value::as_str) {
        Some(url) if schema_url.is_match(url) => {}
        Some(url) => return Err(format!("$schema {url:?} does not match {}", schema_url.as_str())),
        None => return Err("missing $schema".to_string()),
    }

    let schema_path = path.with_file_name(schema_file_name);
    if !schema_path.is_file() {
        return Err(format!("no sibling {schema_file_name}"));
    }
    let validator = compile(&read_json(&schema_path)?)?;

    let errors: Vec<String> = validator
        .iter_errors(&example)
        .map(|e| e.to_string())
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(format!("does not validate: {}", errors.join("; ")))
    }
}

/// Check every schema and example file under the package's schema directory.
///
/// File-level problems are collected into the report; only failing to walk the
/// schema directory is an error.
pub fn check_fixtures(base_dir: &Path, config: &SyncConfig) -> Result<CheckReport, SyncError> {
    let schema_root = config.schema_root(base_dir);
    let schema_url = Regex::new(&format!(
        r"^{}v[0-9.]+/{}$",
        regex::escape(&config.schema_id_base),
        regex::escape(&config.schema_file_name)
    ))?;

    let mut report = CheckReport::default();

    for path in find_files(&schema_root, is_schema_file)? {
        debug!("Checking schema {:?}", path);
        report.schemas_checked += 1;
        if let Err(reason) = check_schema(&path) {
            debug!("{}: {}", path.display(), reason);
            report.failures.push(CheckFailure { path, reason });
        }
    }

    for path in find_files(&schema_root, is_example_file)? {
        debug!("Checking example {:?}", path);
        report.examples_checked += 1;
        if let Err(reason) = check_example(&path, &config.schema_file_name, &schema_url) {
            debug!("{}: {}", path.display(), reason);
            report.failures.push(CheckFailure { path, reason });
        }
    }

    Ok(report)
}
