//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and infrastructure adapters
//! to implement specific use cases:
//!
//! - [`count_terms`]: load terms, enumerate inputs, count per file, publish the report
//! - [`extract_pdfs`]: read a manifest and extract every listed PDF to text
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod count_terms;
pub mod dto;
pub mod extract_pdfs;

pub use count_terms::CountTerms;
pub use dto::{CountOutcome, ExtractOutcome, ExtractedFile, FileFailure};
pub use extract_pdfs::ExtractPdfs;
