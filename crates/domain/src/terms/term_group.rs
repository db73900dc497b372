// crates/domain/src/terms/term_group.rs
use serde::Serialize;

/// One line of the terms file: a label plus the alternative terms it ORs together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermGroup {
    label: String,
    alternatives: Vec<String>,
}

impl TermGroup {
    /// Builds a group from an already trimmed, non-empty line.
    ///
    /// The label is the line verbatim; alternatives are the `/`-separated parts, each trimmed.
    /// Empty alternatives are kept here and rejected by [`TermGroupSet::parse`].
    ///
    /// [`TermGroupSet::parse`]: crate::terms::TermGroupSet::parse
    pub(crate) fn from_line(line: &str) -> Self {
        let alternatives = line
            .split(super::ALTERNATIVE_DELIMITER)
            .map(|term| term.trim().to_string())
            .collect();
        Self { label: line.to_string(), alternatives }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub(crate) fn has_empty_alternative(&self) -> bool {
        self.alternatives.iter().any(String::is_empty)
    }
}
