// crates/domain/src/manifest.rs
//! PDF manifests and the text file names derived from them.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

/// Extension of every extracted text file.
pub const TEXT_EXTENSION: &str = "txt";

const FALLBACK_STEM: &str = "document";

/// Ordered list of PDF paths, one per non-blank manifest line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PdfManifest {
    entries: Vec<PathBuf>,
}

impl PdfManifest {
    pub fn parse(contents: &str) -> Self {
        let entries = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Hands out `<stem>.txt` names, suffixing `_2`, `_3`, ... when a name is already taken.
#[derive(Debug, Default)]
pub struct TextFileNamer {
    taken: HashSet<String>,
}

impl TextFileNamer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self, pdf: &Path) -> String {
        let stem = pdf
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| FALLBACK_STEM.to_string());

        let mut candidate = format!("{stem}.{TEXT_EXTENSION}");
        let mut suffix = 2usize;
        while self.taken.contains(&candidate) {
            candidate = format!("{stem}_{suffix}.{TEXT_EXTENSION}");
            suffix += 1;
        }
        self.taken.insert(candidate.clone());
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_skips_blank_lines_and_trims() {
        let manifest = PdfManifest::parse("  a.pdf \n\n\tdocs/b.pdf\r\n   \n");
        assert_eq!(manifest.entries(), [PathBuf::from("a.pdf"), PathBuf::from("docs/b.pdf")]);
    }

    #[test]
    fn empty_manifest() {
        assert!(PdfManifest::parse("\n  \n").is_empty());
    }

    #[test]
    fn namer_uses_stem() {
        let mut namer = TextFileNamer::new();
        assert_eq!(namer.allocate(Path::new("in/Annual Report.pdf")), "Annual Report.txt");
    }

    #[test]
    fn namer_suffixes_collisions() {
        let mut namer = TextFileNamer::new();
        assert_eq!(namer.allocate(Path::new("a/report.pdf")), "report.txt");
        assert_eq!(namer.allocate(Path::new("b/report.pdf")), "report_2.txt");
        assert_eq!(namer.allocate(Path::new("report_2.pdf")), "report_2_2.txt");
        assert_eq!(namer.allocate(Path::new("c/report.PDF")), "report_3.txt");
    }

    #[test]
    fn namer_falls_back_without_stem() {
        let mut namer = TextFileNamer::new();
        assert_eq!(namer.allocate(Path::new("/")), "document.txt");
    }
}
