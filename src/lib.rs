//! Command-line front end shared by the `termscan` and `pdf2text` binaries.

#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod logging;

pub use termscan_core::VERSION;
