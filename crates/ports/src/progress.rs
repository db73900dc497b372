// crates/ports/src/progress.rs
use std::path::Path;

use termscan_shared_kernel::TermscanError;

/// Receives per-file progress of a batch run.
pub trait ProgressSink: Send + Sync {
    fn on_file(&self, path: &Path, index: usize, total: usize);
    fn on_failure(&self, path: &Path, error: &TermscanError);
    fn on_complete(&self, succeeded: usize, failed: usize);
}

/// Sink that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn on_file(&self, _path: &Path, _index: usize, _total: usize) {}
    fn on_failure(&self, _path: &Path, _error: &TermscanError) {}
    fn on_complete(&self, _succeeded: usize, _failed: usize) {}
}
