//! Idempotent patches that point downstream artifacts at a schema version
//!
//! - readme.rs: README recommended/default version markers
//! - manifest.rs: package.json `main` and `exports["."]`

pub mod manifest;
pub mod readme;

pub use manifest::update_manifest;
pub use readme::update_readme;

/// Whether a patch rewrote its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The target was rewritten
    Updated,
    /// The target already referenced the version and was left untouched
    UpToDate,
}

impl UpdateOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, UpdateOutcome::Updated)
    }
}
