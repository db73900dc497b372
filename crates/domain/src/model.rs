pub mod entities;
pub mod report;
pub mod value_objects;

pub use entities::{FileResult, GroupCount, GroupCounts};
pub use report::{ReportRow, SearchReport};
pub use value_objects::{NormalizedText, RunStamp};
