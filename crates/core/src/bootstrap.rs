use log::debug;
use termscan_domain::{
    config::{CountConfig, ExtractConfig},
    model::RunStamp,
};
use termscan_infra::{
    extraction::{DirectoryTextSink, PdfTextExtractor},
    filesystem::{DirectoryEnumerator, FsTextSource},
    progress::LogProgress,
    report::FileReportSink,
};
use termscan_usecase::{CountOutcome, CountTerms, ExtractOutcome, ExtractPdfs};

use crate::error::Result;

/// Count term groups over the configured input and write the report, stamped with the current time.
///
/// # Errors
///
/// See [`CountTerms::run`].
pub fn run_count(config: &CountConfig) -> Result<CountOutcome> {
    run_count_at(config, RunStamp::now())
}

/// As [`run_count`] with an explicit stamp for the report name.
///
/// # Errors
///
/// See [`CountTerms::run`].
pub fn run_count_at(config: &CountConfig, stamp: RunStamp) -> Result<CountOutcome> {
    debug!("count run {stamp}: {config:?}");
    let source = FsTextSource::new();
    let enumerator = DirectoryEnumerator::new();
    let sink = FileReportSink::new(&config.output_dir, config.format, stamp);
    let progress = LogProgress;

    CountTerms::new(&source, &enumerator, &sink).with_progress(&progress).run(config)
}

/// Extract every PDF in the manifest into a fresh stamped directory.
///
/// # Errors
///
/// See [`ExtractPdfs::run`].
pub fn run_extract(config: &ExtractConfig) -> Result<ExtractOutcome> {
    run_extract_at(config, RunStamp::now())
}

/// As [`run_extract`] with an explicit stamp for the output directory name.
///
/// # Errors
///
/// See [`ExtractPdfs::run`].
pub fn run_extract_at(config: &ExtractConfig, stamp: RunStamp) -> Result<ExtractOutcome> {
    debug!("extract run {stamp}: {config:?}");
    let source = FsTextSource::new();
    let extractor = PdfTextExtractor::new();
    let sink = DirectoryTextSink::new(&config.output_dir, stamp);
    let progress = LogProgress;

    ExtractPdfs::new(&source, &extractor, &sink).with_progress(&progress).run(config)
}
