//! Text extraction for uploaded documents.
//!
//! A [`DocumentFormat`] is picked from the upload's filename, then
//! [`DocumentProcessor::process_document`] turns the raw bytes into plain
//! text on the blocking pool. Parser failures are logged and collapse to an
//! empty string, the same result as a document that has no text layer, so
//! callers only need one emptiness check.

pub mod docx;
pub mod pdf;

#[cfg(test)]
pub(crate) mod fixtures;

use tracing::{debug, warn};

use crate::types::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Match on the literal `.pdf` / `.docx` suffix of the uploaded filename.
    pub fn from_filename(filename: &str) -> AppResult<Self> {
        if filename.ends_with(".pdf") {
            Ok(DocumentFormat::Pdf)
        } else if filename.ends_with(".docx") {
            Ok(DocumentFormat::Docx)
        } else {
            Err(AppError::UnsupportedFormat)
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Pdf => write!(f, "pdf"),
            DocumentFormat::Docx => write!(f, "docx"),
        }
    }
}

pub struct DocumentProcessor;

impl DocumentProcessor {
    /// Extract text off the async runtime. Only a failure of the blocking
    /// task itself is an error here.
    pub async fn process_document(format: DocumentFormat, content: Vec<u8>) -> AppResult<String> {
        tokio::task::spawn_blocking(move || Self::extract_text(format, &content))
            .await
            .map_err(|e| AppError::Internal(format!("Text extraction task failed: {}", e)))
    }

    pub fn extract_text(format: DocumentFormat, content: &[u8]) -> String {
        let result = match format {
            DocumentFormat::Pdf => pdf::extract_text(content),
            DocumentFormat::Docx => docx::extract_text(content),
        };

        match result {
            Ok(text) => {
                debug!(format = %format, bytes = content.len(), text_bytes = text.len(), "Extracted document text");
                text
            }
            Err(e) => {
                warn!(format = %format, error = %e, "Error parsing document");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_filename() {
        assert_eq!(DocumentFormat::from_filename("report.pdf").unwrap(), DocumentFormat::Pdf);
        assert_eq!(DocumentFormat::from_filename("memo.final.docx").unwrap(), DocumentFormat::Docx);
    }

    #[test]
    fn test_unsupported_filenames_rejected() {
        for name in ["sample.txt", "notes.doc", "archive.pdf.zip", "pdf", "", "scan.PDF", "docx"] {
            assert!(
                matches!(DocumentFormat::from_filename(name), Err(AppError::UnsupportedFormat)),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_garbage_bytes_yield_empty_text() {
        assert_eq!(DocumentProcessor::extract_text(DocumentFormat::Pdf, b"not a pdf"), "");
        assert_eq!(DocumentProcessor::extract_text(DocumentFormat::Docx, b"not a zip"), "");
    }

    #[tokio::test]
    async fn test_process_document_runs_pdf_extraction() {
        let bytes = fixtures::pdf_with_pages(&["Quarterly summary"]);
        let text = DocumentProcessor::process_document(DocumentFormat::Pdf, bytes)
            .await
            .unwrap();
        assert!(text.contains("Quarterly"), "got: {text}");
    }
}
