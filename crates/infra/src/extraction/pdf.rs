use std::{panic, path::Path};

use log::debug;
use termscan_ports::extraction::TextExtractor;
use termscan_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileReader;

/// Extracts text from digitally produced PDFs with the `pdf-extract` crate.
///
/// Scanned, image-only documents yield little or no text; no OCR is attempted.
#[derive(Debug, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, pdf: &Path) -> Result<String> {
        let bytes =
            FileReader::read_to_end(pdf).map_err(|err| InfrastructureError::read_failure(pdf, err))?;
        let extraction_failed = |details: String| InfrastructureError::Extraction {
            path: pdf.to_path_buf(),
            details,
        };
        // pdf-extract panics on some malformed documents; keep that failure local to this PDF.
        let text = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(&bytes))
            .map_err(|payload| extraction_failed(panic_message(payload.as_ref())))?
            .map_err(|err| extraction_failed(err.to_string()))?;
        debug!("extracted {} byte(s) of text from {}", text.len(), pdf.display());
        Ok(text)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "parser panicked".to_string())
}

#[cfg(test)]
mod tests {
    use termscan_shared_kernel::TermscanError;

    use super::*;

    #[test]
    fn missing_pdf_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = PdfTextExtractor::new().extract(&dir.path().join("none.pdf")).unwrap_err();
        assert!(matches!(
            err,
            TermscanError::Infrastructure(InfrastructureError::FileNotFound { .. })
        ));
    }

    #[test]
    fn panic_payloads_become_messages() {
        assert_eq!(panic_message(&"bad font"), "bad font");
        assert_eq!(panic_message(&String::from("bad xref")), "bad xref");
        assert_eq!(panic_message(&42_u8), "parser panicked");
    }

    #[test]
    fn garbage_bytes_fail_extraction() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.pdf");
        std::fs::write(&path, b"this is not a pdf").unwrap();

        let err = PdfTextExtractor::new().extract(&path).unwrap_err();
        assert!(matches!(
            err,
            TermscanError::Infrastructure(InfrastructureError::Extraction { .. })
        ));
    }
}
