use std::path::{Path, PathBuf};

use log::info;
use termscan_domain::{
    config::ExtractConfig,
    manifest::{PdfManifest, TextFileNamer},
};
use termscan_ports::{
    extraction::{TextExtractor, TextSink},
    filesystem::TextSource,
    progress::{NoProgress, ProgressSink},
};
use termscan_shared_kernel::{ApplicationError, ErrorContext, Result};

use crate::dto::{ExtractOutcome, ExtractedFile, FileFailure};

/// Manifest → per-PDF extraction → one text file per PDF.
pub struct ExtractPdfs<'a> {
    source: &'a dyn TextSource,
    extractor: &'a dyn TextExtractor,
    sink: &'a dyn TextSink,
    progress: &'a dyn ProgressSink,
}

impl<'a> ExtractPdfs<'a> {
    pub fn new(
        source: &'a dyn TextSource,
        extractor: &'a dyn TextExtractor,
        sink: &'a dyn TextSink,
    ) -> Self {
        Self { source, extractor, sink, progress: &NoProgress }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: &'a dyn ProgressSink) -> Self {
        self.progress = progress;
        self
    }

    /// # Errors
    ///
    /// Fatal: manifest missing or unreadable, manifest without entries, output directory not
    /// creatable, every PDF failed, or (in strict mode) the first PDF failure.
    pub fn run(&self, config: &ExtractConfig) -> Result<ExtractOutcome> {
        config.validate()?;
        let contents = self
            .source
            .read_text(&config.manifest)
            .with_context(|| format!("loading manifest '{}'", config.manifest.display()))?;
        let manifest = PdfManifest::parse(&contents);
        if manifest.is_empty() {
            return Err(ApplicationError::NoFilesFound { path: config.manifest.clone() }.into());
        }

        let output_dir = self.sink.prepare().context("preparing output directory")?;
        info!("extracting {} PDF(s) into {}", manifest.len(), output_dir.display());

        let mut namer = TextFileNamer::new();
        let mut written = Vec::with_capacity(manifest.len());
        let mut failures = Vec::new();
        let total = manifest.len();

        for (index, pdf) in manifest.entries().iter().enumerate() {
            self.progress.on_file(pdf, index + 1, total);
            let file_name = namer.allocate(pdf);
            match self.extract_one(pdf, &file_name) {
                Ok(output) => written.push(ExtractedFile { source: pdf.clone(), output }),
                Err(error) => {
                    self.progress.on_failure(pdf, &error);
                    if config.strict {
                        return Err(ApplicationError::StrictAbort {
                            path: pdf.clone(),
                            source: Box::new(error),
                        }
                        .into());
                    }
                    failures.push(FileFailure { path: pdf.clone(), error });
                }
            }
        }

        self.progress.on_complete(written.len(), failures.len());
        if written.is_empty() {
            return Err(ApplicationError::NothingProcessed { failures: failures.len() }.into());
        }
        Ok(ExtractOutcome { output_dir, written, failures })
    }

    fn extract_one(&self, pdf: &Path, file_name: &str) -> Result<PathBuf> {
        let text = self.extractor.extract(pdf)?;
        self.sink.write(file_name, &text)
    }
}
