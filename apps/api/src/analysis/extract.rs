//! Text extraction for uploaded resumes (PDF, DOCX, TXT).
//!
//! Parsing is delegated to `pdf-extract` and `docx-rs`. Every failure, including a
//! parser panic, comes back as an `ExtractionError`. Failures to store the upload
//! on the server are `Storage` and are not the client's fault.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Could not read DOCX: {0}")]
    Docx(String),

    #[error("Could not read text file: {0}")]
    InvalidUtf8(String),

    #[error("Could not store uploaded file: {0}")]
    Storage(#[from] std::io::Error),
}

impl ExtractionError {
    /// True when the failure is on the server side rather than in the document.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

/// The document formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Txt,
}

impl DocumentKind {
    /// Infers the kind from the extension after the last `.`, case-insensitively.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let (_, ext) = filename.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Txt => "txt",
        }
    }
}

/// Extracts plain text from an in-memory document.
pub fn extract_text(kind: DocumentKind, bytes: &[u8]) -> Result<String, ExtractionError> {
    match kind {
        DocumentKind::Pdf => extract_pdf(bytes),
        DocumentKind::Docx => extract_docx(bytes),
        DocumentKind::Txt => extract_txt(bytes),
    }
}

/// Reads a persisted upload and extracts its text.
pub fn extract_file(kind: DocumentKind, path: &Path) -> Result<String, ExtractionError> {
    let bytes = std::fs::read(path)?;
    extract_text(kind, &bytes)
}

/// Writes an upload to a timestamped temp file in `dir`.
/// The file is deleted when the returned handle is dropped.
pub fn persist_upload(
    dir: &Path,
    kind: DocumentKind,
    bytes: &[u8],
) -> Result<NamedTempFile, ExtractionError> {
    let prefix = format!("{}_", Local::now().format("%Y%m%d_%H%M%S"));
    let suffix = format!(".{}", kind.extension());
    let mut file = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(&suffix)
        .tempfile_in(dir)?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(file)
}

/// Persists the upload, extracts it on the blocking pool, and removes the temp file
/// on every exit path.
pub async fn extract_upload(
    upload_dir: PathBuf,
    kind: DocumentKind,
    bytes: bytes::Bytes,
) -> Result<String, ExtractionError> {
    let joined = tokio::task::spawn_blocking(move || {
        let file = persist_upload(&upload_dir, kind, &bytes)?;
        let text = extract_file(kind, file.path());
        file.close()?;
        text
    })
    .await;

    match joined {
        Ok(result) => result,
        Err(e) => {
            // A panicking parser unwinds here; the temp file was dropped with the task.
            let reason = format!("parser aborted ({e})");
            Err(match kind {
                DocumentKind::Pdf => ExtractionError::Pdf(reason),
                DocumentKind::Docx => ExtractionError::Docx(reason),
                DocumentKind::Txt => ExtractionError::InvalidUtf8(reason),
            })
        }
    }
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    // pdf-extract emits pages in document order
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))
}

fn extract_docx(bytes: &[u8]) -> Result<String, ExtractionError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(&p.children)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(children: &[ParagraphChild]) -> String {
    let mut text = String::new();
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    if let RunChild::Text(t) = run_child {
                        text.push_str(&t.text);
                    }
                }
            }
            // Linked emails and portfolio URLs live inside hyperlinks
            ParagraphChild::Hyperlink(link) => text.push_str(&paragraph_text(&link.children)),
            _ => {}
        }
    }
    text
}

fn extract_txt(bytes: &[u8]) -> Result<String, ExtractionError> {
    String::from_utf8(bytes.to_vec()).map_err(|e| ExtractionError::InvalidUtf8(e.to_string()))
}
