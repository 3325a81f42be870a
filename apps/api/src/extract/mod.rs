//! Text extraction — flattens an uploaded resume into plain text.
//!
//! One extractor per accepted format, selected by `DocumentKind`. Both are
//! synchronous and CPU-bound; callers on the async runtime should run them
//! on the blocking pool.

use std::path::Path;

use thiserror::Error;

pub mod docx;
pub mod pdf;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid PDF: {0}")]
    Pdf(String),

    #[error("PDF page {page} has no extractable text")]
    EmptyPage { page: usize },

    #[error("Invalid DOCX: {0}")]
    Docx(String),
}

/// The document formats the service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Resolves the kind from an upload's filename. Extension match is
    /// case-insensitive; anything other than `.pdf` / `.docx` is `None`.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = Path::new(filename).extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Suffix used for the temporary file, dot included.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => ".pdf",
            Self::Docx => ".docx",
        }
    }
}

/// Extracts the plain text of the document at `path`.
pub fn extract_text(kind: DocumentKind, path: &Path) -> Result<String, ExtractError> {
    match kind {
        DocumentKind::Pdf => pdf::extract(path),
        DocumentKind::Docx => docx::extract(path),
    }
}
