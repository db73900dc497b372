pub mod aggregates;

pub use aggregates::{
    CountConfig, DEFAULT_EXTRACT_DIR, DEFAULT_REPORT_DIR, EXTRACT_DIR_PREFIX, ExtractConfig,
    REPORT_PREFIX,
};
