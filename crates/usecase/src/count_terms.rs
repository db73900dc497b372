use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use termscan_domain::{
    config::CountConfig,
    matching::OccurrenceCounter,
    model::{FileResult, NormalizedText, SearchReport},
    terms::TermGroupSet,
};
use termscan_ports::{
    filesystem::{FileEnumerator, TextSource},
    progress::{NoProgress, ProgressSink},
    report::ReportSink,
};
use termscan_shared_kernel::{ApplicationError, ErrorContext, Result};

use crate::dto::{CountOutcome, FileFailure};

/// Loader → enumerator → counter (once per file) → aggregator → emitter.
pub struct CountTerms<'a> {
    source: &'a dyn TextSource,
    enumerator: &'a dyn FileEnumerator,
    sink: &'a dyn ReportSink,
    progress: &'a dyn ProgressSink,
}

impl<'a> CountTerms<'a> {
    pub fn new(
        source: &'a dyn TextSource,
        enumerator: &'a dyn FileEnumerator,
        sink: &'a dyn ReportSink,
    ) -> Self {
        Self { source, enumerator, sink, progress: &NoProgress }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: &'a dyn ProgressSink) -> Self {
        self.progress = progress;
        self
    }

    /// # Errors
    ///
    /// Fatal before any output: terms file missing/unreadable/invalid, input path missing,
    /// no files resolved, every file failed, or (in strict mode) the first file failure.
    /// Otherwise per-file failures are collected in [`CountOutcome::failures`].
    pub fn run(&self, config: &CountConfig) -> Result<CountOutcome> {
        config.validate()?;
        let groups = self.load_terms(&config.terms_file)?;
        let counter = OccurrenceCounter::compile(&groups)?;

        let files = self
            .enumerator
            .enumerate(&config.input)
            .with_context(|| format!("resolving input '{}'", config.input.display()))?;
        if files.is_empty() {
            return Err(ApplicationError::NoFilesFound { path: config.input.clone() }.into());
        }
        info!("scanning {} file(s) for {} term group(s)", files.len(), groups.len());

        let (results, failures) = self.scan_all(&files, &counter, config.strict)?;
        self.progress.on_complete(results.len(), failures.len());
        if results.is_empty() {
            return Err(ApplicationError::NothingProcessed { failures: failures.len() }.into());
        }

        let report = SearchReport::build(&groups, &results);
        let report_path = self.sink.publish(&report).context("writing report")?;
        Ok(CountOutcome { report_path, results, failures })
    }

    /// Read and parse the terms file.
    ///
    /// # Errors
    ///
    /// Wraps `FileNotFound`/`FileRead` from the source and parse errors from the domain.
    pub fn load_terms(&self, path: &Path) -> Result<TermGroupSet> {
        let contents = self
            .source
            .read_text(path)
            .with_context(|| format!("loading terms file '{}'", path.display()))?;
        let groups = TermGroupSet::parse(&contents)
            .with_context(|| format!("parsing terms file '{}'", path.display()))?;

        for label in groups.duplicate_labels() {
            warn!("term group '{label}' appears more than once; its column will be repeated");
        }
        debug!("loaded {} term group(s) from {}", groups.len(), path.display());
        Ok(groups)
    }

    fn scan_all(
        &self,
        files: &[PathBuf],
        counter: &OccurrenceCounter,
        strict: bool,
    ) -> Result<(Vec<FileResult>, Vec<FileFailure>)> {
        let mut results = Vec::with_capacity(files.len());
        let mut failures = Vec::new();

        for (index, path) in files.iter().enumerate() {
            self.progress.on_file(path, index + 1, files.len());
            match self.scan_file(path, counter) {
                Ok(result) => results.push(result),
                Err(error) => {
                    self.progress.on_failure(path, &error);
                    if strict {
                        return Err(ApplicationError::StrictAbort {
                            path: path.clone(),
                            source: Box::new(error),
                        }
                        .into());
                    }
                    failures.push(FileFailure { path: path.clone(), error });
                }
            }
        }
        Ok((results, failures))
    }

    fn scan_file(&self, path: &Path, counter: &OccurrenceCounter) -> Result<FileResult> {
        let raw = self.source.read_text(path)?;
        let text = NormalizedText::new(&raw);
        Ok(FileResult::new(path, counter.count(&text)))
    }
}
