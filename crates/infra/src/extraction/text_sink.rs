use std::path::PathBuf;

use termscan_domain::{config::EXTRACT_DIR_PREFIX, model::RunStamp};
use termscan_ports::extraction::TextSink;
use termscan_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileWriter;

/// Writes text files into `<root>/pdf_text_<stamp>/`.
#[derive(Debug, Clone)]
pub struct DirectoryTextSink {
    dir: PathBuf,
}

impl DirectoryTextSink {
    pub fn new(root: impl Into<PathBuf>, stamp: RunStamp) -> Self {
        Self { dir: root.into().join(stamp.dir_name(EXTRACT_DIR_PREFIX)) }
    }
}

impl TextSink for DirectoryTextSink {
    fn prepare(&self) -> Result<PathBuf> {
        FileWriter::ensure_dir(&self.dir).map_err(|source| {
            InfrastructureError::FileSystemOperation {
                operation: "create directory".to_string(),
                path: self.dir.clone(),
                source,
            }
        })?;
        Ok(self.dir.clone())
    }

    fn write(&self, file_name: &str, text: &str) -> Result<PathBuf> {
        let path = self.dir.join(file_name);
        FileWriter::atomic_write(&path, text.as_bytes())
            .map_err(|source| InfrastructureError::FileWrite { path: path.clone(), source })?;
        Ok(path)
    }
}
