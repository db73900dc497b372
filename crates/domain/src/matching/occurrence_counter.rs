// crates/domain/src/matching/occurrence_counter.rs
use termscan_shared_kernel::{DomainResult, MatchCount};

use crate::{
    matching::TermPattern,
    model::{GroupCounts, NormalizedText},
    terms::TermGroupSet,
};

/// A term group with each alternative compiled.
#[derive(Debug, Clone)]
struct CompiledGroup {
    label: String,
    patterns: Vec<TermPattern>,
}

impl CompiledGroup {
    /// Sum of the independent per-alternative counts; overlapping alternatives are not deduplicated.
    fn count(&self, text: &NormalizedText) -> MatchCount {
        self.patterns.iter().map(|pattern| pattern.count_in(text)).sum()
    }
}

/// Counts whole-word occurrences of every term group in a normalized text.
///
/// Compiled once per run and shared read-only across all files.
#[derive(Debug, Clone)]
pub struct OccurrenceCounter {
    groups: Vec<CompiledGroup>,
}

impl OccurrenceCounter {
    /// # Errors
    ///
    /// Fails if any alternative cannot be compiled into a pattern.
    pub fn compile(groups: &TermGroupSet) -> DomainResult<Self> {
        let groups = groups
            .iter()
            .map(|group| {
                let patterns = group
                    .alternatives()
                    .iter()
                    .map(|term| TermPattern::compile(term))
                    .collect::<DomainResult<Vec<_>>>()?;
                Ok(CompiledGroup { label: group.label().to_string(), patterns })
            })
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self { groups })
    }

    /// One entry per group, in group order.
    pub fn count(&self, text: &NormalizedText) -> GroupCounts {
        self.groups
            .iter()
            .map(|group| (group.label.clone(), group.count(text)))
            .collect()
    }
}
