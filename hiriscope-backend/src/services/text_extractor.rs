//! Plain-text extraction from uploaded résumé documents.
//!
//! Two formats are understood: PDF (via `pdf-extract`) and DOCX
//! (WordprocessingML inside a zip container). Failures come back as
//! [`ExtractError`] values; nothing here retries.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("failed to parse document: {0}")]
    ParseFailure(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(Self::Pdf)
        } else if lower.ends_with(".docx") {
            Some(Self::Docx)
        } else {
            None
        }
    }
}

pub fn extract_text(filename: &str, content: &[u8]) -> Result<String, ExtractError> {
    match DocumentKind::from_filename(filename) {
        Some(DocumentKind::Pdf) => extract_pdf(content),
        Some(DocumentKind::Docx) => extract_docx(content),
        None => Err(ExtractError::UnsupportedFormat(filename.to_string())),
    }
}

/// Runs [`extract_text`] on the blocking pool.
pub async fn extract_text_blocking(
    filename: String,
    content: bytes::Bytes,
) -> Result<String, ExtractError> {
    tokio::task::spawn_blocking(move || extract_text(&filename, &content))
        .await
        .map_err(|e| ExtractError::ParseFailure(format!("parser aborted: {}", e)))?
}

fn extract_pdf(content: &[u8]) -> Result<String, ExtractError> {
    // pdf-extract panics on some malformed inputs instead of returning Err.
    std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(content))
        .map_err(|_| ExtractError::ParseFailure("pdf parser panicked".to_string()))?
        .map_err(|e| ExtractError::ParseFailure(e.to_string()))
}

fn extract_docx(content: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(content))
        .map_err(|e| ExtractError::ParseFailure(format!("not a docx container: {}", e)))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::ParseFailure(format!("missing document body: {}", e)))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::ParseFailure(e.to_string()))?;

    paragraphs_from_document_xml(&xml).map(|paragraphs| paragraphs.join("\n"))
}

/// Collects the text of every `w:p` element, in document order.
fn paragraphs_from_document_xml(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => {
                    in_paragraph = true;
                    current.clear();
                }
                b"w:t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:p" => paragraphs.push(String::new()),
                b"w:tab" if in_paragraph => current.push('\t'),
                b"w:br" if in_paragraph => current.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| ExtractError::ParseFailure(e.to_string()))?;
                current.push_str(&text);
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => {
                    in_paragraph = false;
                    paragraphs.push(std::mem::take(&mut current));
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ExtractError::ParseFailure(format!(
                    "malformed document xml at {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
        }
    }

    Ok(paragraphs)
}
