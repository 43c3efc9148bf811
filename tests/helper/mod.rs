//! Test helpers for building schema package fixtures

#![allow(dead_code, unused_imports)]

pub mod package;

pub use package::{TestPackage, copy_dir};
