use std::path::PathBuf;

use termscan_domain::model::FileResult;
use termscan_shared_kernel::TermscanError;

/// A file that could not be processed; the run carried on without it.
#[derive(Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: TermscanError,
}

/// Result of a completed term-counting run.
#[derive(Debug)]
pub struct CountOutcome {
    pub report_path: PathBuf,
    pub results: Vec<FileResult>,
    pub failures: Vec<FileFailure>,
}

/// One PDF successfully converted to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    pub source: PathBuf,
    pub output: PathBuf,
}

/// Result of a completed extraction run.
#[derive(Debug)]
pub struct ExtractOutcome {
    pub output_dir: PathBuf,
    pub written: Vec<ExtractedFile>,
    pub failures: Vec<FileFailure>,
}
