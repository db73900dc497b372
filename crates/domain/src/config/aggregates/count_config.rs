use std::path::PathBuf;

use termscan_shared_kernel::{DomainError, DomainResult};

use crate::options::OutputFormat;

/// Directory reports are written to when none is configured.
pub const DEFAULT_REPORT_DIR: &str = "results";

/// Report files are named `<REPORT_PREFIX>_<YYYYMMDD_HHMMSS>.<ext>`.
pub const REPORT_PREFIX: &str = "search_results";

/// Resolved settings for one term-counting run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountConfig {
    /// A single file or a directory whose direct children are scanned.
    pub input: PathBuf,
    pub terms_file: PathBuf,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    /// Abort on the first unreadable file instead of skipping it.
    pub strict: bool,
}

impl CountConfig {
    pub fn new(input: impl Into<PathBuf>, terms_file: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            terms_file: terms_file.into(),
            output_dir: PathBuf::from(DEFAULT_REPORT_DIR),
            format: OutputFormat::default(),
            strict: false,
        }
    }

    /// # Errors
    ///
    /// `DomainError::InvalidConfiguration` when a required path is empty.
    pub fn validate(&self) -> DomainResult<()> {
        for (name, path) in [
            ("input path", &self.input),
            ("terms file", &self.terms_file),
            ("output directory", &self.output_dir),
        ] {
            if path.as_os_str().is_empty() {
                return Err(DomainError::InvalidConfiguration { reason: format!("{name} is empty") });
            }
        }
        Ok(())
    }
}
