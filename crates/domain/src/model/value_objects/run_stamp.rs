use std::fmt;

use chrono::{DateTime, Local};

/// Compact timestamp format used in generated file and directory names.
pub const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Wall-clock instant captured once at the start of a run and reused for every generated name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStamp(DateTime<Local>);

impl RunStamp {
    pub fn now() -> Self {
        Self(Local::now())
    }

    pub fn at(instant: DateTime<Local>) -> Self {
        Self(instant)
    }

    /// `YYYYMMDD_HHMMSS`
    pub fn compact(&self) -> String {
        self.0.format(STAMP_FORMAT).to_string()
    }

    /// `<prefix>_<YYYYMMDD_HHMMSS>.<extension>`
    pub fn file_name(&self, prefix: &str, extension: &str) -> String {
        format!("{prefix}_{}.{extension}", self.compact())
    }

    /// `<prefix>_<YYYYMMDD_HHMMSS>`
    pub fn dir_name(&self, prefix: &str) -> String {
        format!("{prefix}_{}", self.compact())
    }
}

impl fmt::Display for RunStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.compact())
    }
}
