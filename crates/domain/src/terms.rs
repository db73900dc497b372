//! Term groups loaded from a terms file: one group per line, alternatives split on `/`.

mod term_group;
mod term_group_set;

pub use term_group::TermGroup;
pub use term_group_set::TermGroupSet;

/// Separator between alternative terms inside one line.
pub const ALTERNATIVE_DELIMITER: char = '/';
