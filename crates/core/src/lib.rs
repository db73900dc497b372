//! Facade over the termscan workspace: wires the filesystem adapters into the use cases.

#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;
pub mod error;

pub use bootstrap::{run_count, run_count_at, run_extract, run_extract_at};
pub use termscan_domain::{
    config::{CountConfig, DEFAULT_EXTRACT_DIR, DEFAULT_REPORT_DIR, ExtractConfig},
    model::RunStamp,
    options::OutputFormat,
};
pub use termscan_usecase::{CountOutcome, ExtractOutcome, ExtractedFile, FileFailure};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
