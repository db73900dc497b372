// crates/ports/src/report.rs
use std::path::PathBuf;

use termscan_domain::model::SearchReport;
use termscan_shared_kernel::Result;

/// Port for persisting the aggregated report. Returns where it was written.
pub trait ReportSink: Send + Sync {
    fn publish(&self, report: &SearchReport) -> Result<PathBuf>;
}
