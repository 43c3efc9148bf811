//! Keeps a versioned JSON Schema package in sync with its newest schema revision.
//!
//! # Modules
//!
//! - [`config`]: Package layout configuration and defaults
//! - [`version`]: Version directory discovery and ordering
//! - [`update`]: Idempotent README and package.json patches
//! - [`sync`]: Orchestration of discovery and both patches
//! - [`schema`]: Schema and example fixture checks
//! - [`logging`]: tracing subscriber setup for the binary

pub mod config;
pub mod logging;
pub mod schema;
pub mod sync;
pub mod update;
pub mod version;
