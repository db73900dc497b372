use std::path::PathBuf;

use clap::Parser;
use termscan_core::{DEFAULT_REPORT_DIR, VERSION};

use super::value_enum::CliOutputFormat;

/// Count term-group occurrences in text files and write a report.
#[derive(Parser, Debug)]
#[command(name = "termscan", version = VERSION)]
pub struct CountArgs {
    /// A text file, or a directory whose direct files are scanned
    pub input_path: PathBuf,

    /// One term group per line; alternatives separated by '/'
    pub terms_file: PathBuf,

    /// Directory the report is written to (created if missing)
    #[arg(long, default_value = DEFAULT_REPORT_DIR)]
    pub output_dir: PathBuf,

    /// Report format
    #[arg(long, value_enum, default_value_t = CliOutputFormat::Csv)]
    pub format: CliOutputFormat,

    /// Abort on the first unreadable file
    #[arg(long)]
    pub strict: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Errors only
    #[arg(short, long)]
    pub quiet: bool,
}
