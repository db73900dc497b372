use serde::Serialize;
use termscan_shared_kernel::{FilePath, MatchCount};

/// Count for one term group in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    label: String,
    count: MatchCount,
}

impl GroupCount {
    pub fn new(label: impl Into<String>, count: MatchCount) -> Self {
        Self { label: label.into(), count }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn count(&self) -> MatchCount {
        self.count
    }
}

/// Per-group counts for one file, in term-group order.
///
/// Kept as an ordered list rather than a map so duplicate labels each keep their own entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupCounts(Vec<GroupCount>);

impl GroupCounts {
    pub fn iter(&self) -> std::slice::Iter<'_, GroupCount> {
        self.0.iter()
    }

}

impl FromIterator<(String, MatchCount)> for GroupCounts {
    fn from_iter<I: IntoIterator<Item = (String, MatchCount)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(label, count)| GroupCount { label, count }).collect())
    }
}

impl<'a> IntoIterator for &'a GroupCounts {
    type Item = &'a GroupCount;
    type IntoIter = std::slice::Iter<'a, GroupCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Outcome of scanning one readable file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub file: FilePath,
    pub counts: GroupCounts,
}

impl FileResult {
    pub fn new(file: impl Into<FilePath>, counts: GroupCounts) -> Self {
        Self { file: file.into(), counts }
    }
}
