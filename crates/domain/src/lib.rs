//! # Domain
//!
//! Term groups, the whole-word occurrence counter, per-file results and the report model.
//! Pure logic only: nothing here touches the filesystem.

#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod manifest;
pub mod matching;
pub mod model;
pub mod options;
pub mod terms;
