// crates/ports/src/extraction.rs
use std::path::{Path, PathBuf};

use termscan_shared_kernel::Result;

/// Port for turning one PDF into plain text. Parsing is entirely the adapter's concern.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, pdf: &Path) -> Result<String>;
}

/// Port for writing extracted text into the run's output directory.
pub trait TextSink: Send + Sync {
    /// Create the output directory; called once before the first write.
    fn prepare(&self) -> Result<PathBuf>;

    /// Write `text` as `file_name` inside the output directory, returning the full path.
    fn write(&self, file_name: &str, text: &str) -> Result<PathBuf>;
}
