// crates/infra/src/filesystem.rs
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use log::{debug, warn};
use termscan_ports::filesystem::{FileEnumerator, TextSource};
use termscan_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileReader;

/// Filesystem adapter implementing the `FileEnumerator` port.
///
/// Directories are listed one level deep, without ignore-file or hidden-file filtering.
#[derive(Debug, Default)]
pub struct DirectoryEnumerator;

impl DirectoryEnumerator {
    pub fn new() -> Self {
        Self
    }
}

impl FileEnumerator for DirectoryEnumerator {
    fn enumerate(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let metadata =
            std::fs::metadata(path).map_err(|err| InfrastructureError::read_failure(path, err))?;

        if metadata.is_file() {
            return Ok(vec![path.to_path_buf()]);
        }
        if !metadata.is_dir() {
            debug!("{} is neither a file nor a directory", path.display());
            return Ok(Vec::new());
        }
        Ok(list_directory(path))
    }
}

fn list_directory(dir: &Path) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(dir);
    builder
        .standard_filters(false)
        .follow_links(true)
        .max_depth(Some(1));

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry in {}: {err}", dir.display());
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        if entry.file_type().is_some_and(|ft| ft.is_file()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    files
}

/// Reads whole files as text.
#[derive(Debug, Default)]
pub struct FsTextSource;

impl FsTextSource {
    pub fn new() -> Self {
        Self
    }
}

impl TextSource for FsTextSource {
    fn read_text(&self, path: &Path) -> Result<String> {
        FileReader::read_text_lossy(path)
            .map_err(|err| InfrastructureError::read_failure(path, err).into())
    }
}
