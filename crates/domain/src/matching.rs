//! Whole-word occurrence counting over normalized text.

mod occurrence_counter;
mod term_pattern;

pub use occurrence_counter::OccurrenceCounter;
pub use term_pattern::TermPattern;
