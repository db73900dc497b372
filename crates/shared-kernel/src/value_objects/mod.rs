// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_info;
pub mod match_count;

pub use file_info::{FileName, FilePath};
pub use match_count::MatchCount;
