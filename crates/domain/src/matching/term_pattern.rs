// crates/domain/src/matching/term_pattern.rs
use regex::Regex;
use termscan_shared_kernel::{DomainError, DomainResult, MatchCount};

use crate::model::NormalizedText;

/// Closing punctuation swallowed after a term: `. , ! ? : ; " ' ) ] }`.
const TRAILING_PUNCTUATION_CLASS: &str = r#"[.,!?:;"')\]}]*"#;

/// A single search term compiled for whole-word counting.
///
/// An occurrence must start at the beginning of the text or right after whitespace. After the
/// term, a run of closing punctuation is absorbed, and what follows must be whitespace or the end
/// of the text.
///
/// Quoted, bracketed and compound forms are therefore not counted: `"cat"`, `(cat)`, `cat's` and
/// `cat-like` contribute nothing to a count of `cat`.
#[derive(Debug, Clone)]
pub struct TermPattern {
    term: String,
    regex: Regex,
}

impl TermPattern {
    /// Lowercases and escapes `term`, so it is matched as literal text.
    ///
    /// # Errors
    ///
    /// `DomainError::InvalidPattern` if the term is empty or the pattern fails to compile.
    pub fn compile(term: &str) -> DomainResult<Self> {
        let term = term.to_lowercase();
        if term.is_empty() {
            return Err(DomainError::InvalidPattern {
                pattern: term,
                details: "empty search term".to_string(),
                source: None,
            });
        }

        let pattern = format!("{}{TRAILING_PUNCTUATION_CLASS}", regex::escape(&term));
        let regex = Regex::new(&pattern).map_err(|err| DomainError::InvalidPattern {
            pattern: pattern.clone(),
            details: err.to_string(),
            source: Some(Box::new(err)),
        })?;
        Ok(Self { term, regex })
    }

    /// The lowercased term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Count non-overlapping whole-word occurrences across the entire text.
    pub fn count_in(&self, text: &NormalizedText) -> MatchCount {
        let haystack = text.as_str();
        let mut count = MatchCount::zero();
        let mut cursor = 0;

        while let Some(found) = self.regex.find_at(haystack, cursor) {
            if opens_token(haystack, found.start()) && closes_token(haystack, found.end()) {
                count += 1;
                cursor = found.end();
            } else {
                cursor = next_char_boundary(haystack, found.start());
            }
            if cursor >= haystack.len() {
                break;
            }
        }
        count
    }
}

fn opens_token(haystack: &str, start: usize) -> bool {
    haystack[..start].chars().next_back().is_none_or(char::is_whitespace)
}

fn closes_token(haystack: &str, end: usize) -> bool {
    haystack[end..].chars().next().is_none_or(char::is_whitespace)
}

fn next_char_boundary(haystack: &str, from: usize) -> usize {
    haystack[from..].chars().next().map_or(haystack.len(), |c| from + c.len_utf8())
}
