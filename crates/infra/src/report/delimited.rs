use termscan_domain::model::SearchReport;
use termscan_shared_kernel::{InfraResult, InfrastructureError};

fn csv_error(details: impl ToString) -> InfrastructureError {
    InfrastructureError::SerializationError { format: "CSV".to_string(), details: details.to_string() }
}

/// Header row then one row per file, RFC 4180 quoting.
pub fn render(report: &SearchReport) -> InfraResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in report.records() {
        writer.write_record(&record).map_err(csv_error)?;
    }
    writer.into_inner().map_err(csv_error)
}
