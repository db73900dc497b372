// crates/infra/src/progress.rs
use std::path::Path;

use log::{debug, error, info};
use termscan_ports::progress::ProgressSink;
use termscan_shared_kernel::TermscanError;

/// Progress reporting through the `log` facade.
///
/// Per-file failures go out at error level, so `-q` still names every skipped file.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn on_file(&self, path: &Path, index: usize, total: usize) {
        debug!("[{index}/{total}] {}", path.display());
    }

    fn on_failure(&self, path: &Path, error: &TermscanError) {
        error!("failed to process {}: {error}", path.display());
    }

    fn on_complete(&self, succeeded: usize, failed: usize) {
        info!("{succeeded} file(s) processed, {failed} failed");
    }
}
