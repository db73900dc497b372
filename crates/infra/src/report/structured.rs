use termscan_domain::model::SearchReport;
use termscan_shared_kernel::InfraResult;

/// Pretty-printed array of `{ "filename", "counts": [{ "label", "count" }] }`.
pub fn render(report: &SearchReport) -> InfraResult<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(report.rows())?;
    bytes.push(b'\n');
    Ok(bytes)
}
