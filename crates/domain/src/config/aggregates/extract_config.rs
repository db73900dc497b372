use std::path::PathBuf;

use termscan_shared_kernel::{DomainError, DomainResult};

/// Parent of the per-run extraction directories when none is configured.
pub const DEFAULT_EXTRACT_DIR: &str = "extracted";

/// Each run writes into `<output_dir>/<EXTRACT_DIR_PREFIX>_<YYYYMMDD_HHMMSS>/`.
pub const EXTRACT_DIR_PREFIX: &str = "pdf_text";

/// Resolved settings for one PDF extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    pub manifest: PathBuf,
    pub output_dir: PathBuf,
    pub strict: bool,
}

impl ExtractConfig {
    pub fn new(manifest: impl Into<PathBuf>) -> Self {
        Self { manifest: manifest.into(), output_dir: PathBuf::from(DEFAULT_EXTRACT_DIR), strict: false }
    }

    /// # Errors
    ///
    /// `DomainError::InvalidConfiguration` when a required path is empty.
    pub fn validate(&self) -> DomainResult<()> {
        if self.manifest.as_os_str().is_empty() {
            return Err(DomainError::InvalidConfiguration { reason: "manifest path is empty".into() });
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(DomainError::InvalidConfiguration { reason: "output directory is empty".into() });
        }
        Ok(())
    }
}
