//! Schema package fixture checks
//! - check.rs: schema metadata, schema compilation and example validation

pub mod check;

pub use check::{CheckFailure, CheckReport, check_fixtures};
