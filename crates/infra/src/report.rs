// crates/infra/src/report.rs
use std::path::PathBuf;

use log::info;
use termscan_domain::{
    config::REPORT_PREFIX,
    model::{RunStamp, SearchReport},
    options::OutputFormat,
};
use termscan_ports::report::ReportSink;
use termscan_shared_kernel::{InfrastructureError, Result, path::logical_absolute};

use crate::persistence::FileWriter;

pub mod delimited;
pub mod structured;

/// Writes `search_results_<stamp>.<ext>` into a fixed output directory.
#[derive(Debug, Clone)]
pub struct FileReportSink {
    output_dir: PathBuf,
    format: OutputFormat,
    stamp: RunStamp,
}

impl FileReportSink {
    pub fn new(output_dir: impl Into<PathBuf>, format: OutputFormat, stamp: RunStamp) -> Self {
        Self { output_dir: output_dir.into(), format, stamp }
    }

    /// Where the report will be written.
    pub fn target(&self) -> PathBuf {
        self.output_dir.join(self.stamp.file_name(REPORT_PREFIX, self.format.extension()))
    }
}

impl ReportSink for FileReportSink {
    fn publish(&self, report: &SearchReport) -> Result<PathBuf> {
        FileWriter::ensure_dir(&self.output_dir).map_err(|source| {
            InfrastructureError::FileSystemOperation {
                operation: "create directory".to_string(),
                path: self.output_dir.clone(),
                source,
            }
        })?;

        let bytes = match self.format {
            OutputFormat::Csv => delimited::render(report)?,
            OutputFormat::Json => structured::render(report)?,
        };

        let path = self.target();
        FileWriter::atomic_write(&path, &bytes)
            .map_err(|source| InfrastructureError::FileWrite { path: path.clone(), source })?;
        info!(
            "wrote {} row(s) as {} to {}",
            report.rows().len(),
            self.format,
            logical_absolute(&path).display()
        );
        Ok(path)
    }
}
