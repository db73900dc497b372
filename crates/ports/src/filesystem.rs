// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use termscan_shared_kernel::Result;

/// Port for resolving a user-supplied path into the ordered list of files to scan.
pub trait FileEnumerator: Send + Sync {
    /// `[path]` for a regular file, the sorted regular files directly inside a directory,
    /// and an empty list for anything else.
    fn enumerate(&self, path: &Path) -> Result<Vec<PathBuf>>;
}

/// Port for loading a whole file as text.
pub trait TextSource: Send + Sync {
    /// Fails with `InfrastructureError::FileNotFound` for a missing file and
    /// `InfrastructureError::FileRead` for any other I/O failure.
    fn read_text(&self, path: &Path) -> Result<String>;
}
