pub mod file_result;

pub use file_result::{FileResult, GroupCount, GroupCounts};
