//! Schema version directory handling
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  schema/     │────▶│  Discovery   │────▶│   Segments   │
//! │  v<version>/ │     │ (read_dir)   │     │ (version cmp)│
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`discovery`]: Lists `v<version>` directories and picks the highest
//! - [`segments`]: Segment parsing and the zero-padded comparator
//! - [`error`]: Error type shared by the whole crate

pub mod discovery;
pub mod error;
pub mod segments;

pub use discovery::{VersionEntry, discover_versions, latest_version};
pub use error::SyncError;
