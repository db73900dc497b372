// crates/domain/src/terms/term_group_set.rs
use std::collections::HashSet;

use termscan_shared_kernel::{DomainError, DomainResult};

use super::TermGroup;

/// Ordered term groups, one per non-blank line of the terms file.
///
/// Order is significant: it is the column order of every report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermGroupSet {
    groups: Vec<TermGroup>,
}

impl TermGroupSet {
    /// Parse the raw contents of a terms file.
    ///
    /// Lines are trimmed and blank ones dropped. Identical lines yield identical groups;
    /// nothing is deduplicated.
    ///
    /// # Errors
    ///
    /// `DomainError::EmptyTerm` when a line has an empty alternative (`a//b`),
    /// `DomainError::NoTermGroups` when no non-blank line exists.
    pub fn parse(contents: &str) -> DomainResult<Self> {
        let mut groups = Vec::new();
        for (index, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let group = TermGroup::from_line(line);
            if group.has_empty_alternative() {
                return Err(DomainError::EmptyTerm { line_number: index + 1, line: line.to_string() });
            }
            groups.push(group);
        }

        if groups.is_empty() {
            return Err(DomainError::NoTermGroups);
        }
        Ok(Self { groups })
    }

    pub fn groups(&self) -> &[TermGroup] {
        &self.groups
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TermGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Labels in file order, duplicates included.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.iter().map(TermGroup::label)
    }

    /// Labels occurring more than once, each reported once in first-seen order.
    pub fn duplicate_labels(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for label in self.labels() {
            if !seen.insert(label) && reported.insert(label) {
                duplicates.push(label);
            }
        }
        duplicates
    }
}

impl<'a> IntoIterator for &'a TermGroupSet {
    type Item = &'a TermGroup;
    type IntoIter = std::slice::Iter<'a, TermGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_skipped() {
        let set = TermGroupSet::parse("cat\n\ndog\n").unwrap();
        assert_eq!(set.labels().collect::<Vec<_>>(), ["cat", "dog"]);
    }

    #[test]
    fn whitespace_only_lines_are_skipped_and_labels_trimmed() {
        let set = TermGroupSet::parse("  \t\n  cat/cats  \r\n   \n").unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.groups()[0].label(), "cat/cats");
        assert_eq!(set.groups()[0].alternatives(), ["cat", "cats"]);
    }

    #[test]
    fn order_follows_file() {
        let set = TermGroupSet::parse("zebra\napple\nmango").unwrap();
        assert_eq!(set.labels().collect::<Vec<_>>(), ["zebra", "apple", "mango"]);
    }

    #[test]
    fn duplicate_lines_are_preserved() {
        let set = TermGroupSet::parse("cat\ndog\ncat\ncat\n").unwrap();
        assert_eq!(set.len(), 4);
        assert_eq!(set.duplicate_labels(), ["cat"]);
    }

    #[test]
    fn empty_alternative_is_rejected_with_line_number() {
        let err = TermGroupSet::parse("ok\n\na//b\n").unwrap_err();
        match err {
            DomainError::EmptyTerm { line_number, line } => {
                assert_eq!(line_number, 3);
                assert_eq!(line, "a//b");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn trailing_delimiter_is_rejected() {
        assert!(matches!(TermGroupSet::parse("cat/"), Err(DomainError::EmptyTerm { .. })));
    }

    #[test]
    fn blank_input_has_no_groups() {
        assert!(matches!(TermGroupSet::parse("\n \n"), Err(DomainError::NoTermGroups)));
        assert!(matches!(TermGroupSet::parse(""), Err(DomainError::NoTermGroups)));
    }
}
