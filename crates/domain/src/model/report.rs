use serde::Serialize;
use termscan_shared_kernel::{FileName, MatchCount};

use crate::{
    model::{FileResult, GroupCount},
    terms::TermGroupSet,
};

/// Header cell in front of the group labels.
pub const FILENAME_COLUMN: &str = "Filename";

/// One data row: a file basename and its counts in group order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub filename: FileName,
    pub counts: Vec<GroupCount>,
}

impl ReportRow {
    pub fn values(&self) -> impl Iterator<Item = MatchCount> + '_ {
        self.counts.iter().map(GroupCount::count)
    }
}

/// Tabular view of a run: header plus one row per successfully scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    header: Vec<String>,
    rows: Vec<ReportRow>,
}

impl SearchReport {
    /// Aggregate results in the order they were produced.
    pub fn build(groups: &TermGroupSet, results: &[FileResult]) -> Self {
        let header = std::iter::once(FILENAME_COLUMN.to_string())
            .chain(groups.labels().map(str::to_string))
            .collect();
        let rows = results
            .iter()
            .map(|result| ReportRow {
                filename: result.file.file_name(),
                counts: result.counts.iter().cloned().collect(),
            })
            .collect();
        Self { header, rows }
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Header followed by every row, each as display strings.
    pub fn records(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        std::iter::once(self.header.clone()).chain(self.rows.iter().map(|row| {
            std::iter::once(row.filename.to_string())
                .chain(row.values().map(|count| count.to_string()))
                .collect()
        }))
    }
}
