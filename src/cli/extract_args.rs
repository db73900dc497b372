use std::path::PathBuf;

use clap::Parser;
use termscan_core::{DEFAULT_EXTRACT_DIR, VERSION};

/// Extract the text of every PDF listed in a manifest.
#[derive(Parser, Debug)]
#[command(name = "pdf2text", version = VERSION)]
pub struct ExtractArgs {
    /// Text file with one PDF path per line
    pub manifest: PathBuf,

    /// Parent of the stamped `pdf_text_<timestamp>` directory
    #[arg(long, default_value = DEFAULT_EXTRACT_DIR)]
    pub output_dir: PathBuf,

    /// Abort on the first PDF that cannot be extracted
    #[arg(long)]
    pub strict: bool,

    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    #[arg(short, long)]
    pub quiet: bool,
}
