//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: Input enumeration and text reading
//! - [`report`]: Publishing the aggregated search report
//! - [`extraction`]: PDF text extraction and text output
//! - [`progress`]: Progress reporting for per-file processing
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod extraction;
pub mod filesystem;
pub mod progress;
pub mod report;
