// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod extraction;
pub mod filesystem;
pub mod persistence;
pub mod progress;
pub mod report;
