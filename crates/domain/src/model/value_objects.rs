pub mod normalized_text;
pub mod run_stamp;

pub use normalized_text::NormalizedText;
pub use run_stamp::RunStamp;
