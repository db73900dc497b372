pub mod count_config;
pub mod extract_config;

pub use count_config::{CountConfig, DEFAULT_REPORT_DIR, REPORT_PREFIX};
pub use extract_config::{DEFAULT_EXTRACT_DIR, EXTRACT_DIR_PREFIX, ExtractConfig};
