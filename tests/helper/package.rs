//! Schema package fixture builder

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// A throwaway schema package laid out like the real one
pub struct TestPackage {
    dir: TempDir,
}

impl TestPackage {
    /// Package with an empty `schema/` directory
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("schema")).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Add `schema/v<version>/block.schema.json`
    pub fn with_version(self, version: &str) -> Self {
        let version_dir = self.path(&format!("schema/v{version}"));
        fs::create_dir_all(&version_dir).unwrap();
        fs::write(
            version_dir.join("block.schema.json"),
            serde_json::to_string_pretty(&json!({ "version": version })).unwrap(),
        )
        .unwrap();
        self
    }

    pub fn with_versions(self, versions: &[&str]) -> Self {
        versions
            .iter()
            .fold(self, |package, version| package.with_version(version))
    }

    /// Write a README whose markers reference `version`
    pub fn with_readme(self, version: &str) -> Self {
        fs::write(self.path("README.md"), readme(version)).unwrap();
        self
    }

    /// Write a package.json whose entry points reference `version`
    pub fn with_manifest(self, version: &str) -> Self {
        let mut content = serde_json::to_string_pretty(&manifest(version)).unwrap();
        content.push('\n');
        fs::write(self.path("package.json"), content).unwrap();
        self
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }

    pub fn read_manifest(&self) -> Value {
        serde_json::from_str(&self.read("package.json")).unwrap()
    }
}

pub fn readme(version: &str) -> String {
    format!(
        r#"# Test Package

## Version Guide

- **v{version}** (Recommended) - Latest version
- **v0.1** (Stable) - Base version

## Usage

```javascript
import blockSchema from '@lumina-study/block-schema' // v{version} (default for stability)
```
"#
    )
}

pub fn manifest(version: &str) -> Value {
    json!({
        "name": "test-package",
        "version": "1.0.0",
        "main": format!("./schema/v{version}/block.schema.json"),
        "exports": {
            ".": format!("./schema/v{version}/block.schema.json"),
            "./v0.1": "./schema/v0.1/block.schema.json",
            "./v0.2": "./schema/v0.2/block.schema.json"
        }
    })
}

/// Recursively copy `from` into `to`
pub fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), target).unwrap();
        }
    }
}
