//! PDF text extraction.
//!
//! Wraps the `pdf-extract` crate: reads the saved upload page by page and
//! assembles one plain-text blob. Scanned/image-only PDFs come back empty;
//! the handler turns both the empty case and outright parse failures into
//! the same client-facing "unreadable" error.

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("PDF parse error: {0}")]
    Parse(#[from] pdf_extract::OutputError),
}

/// Extracts plain text from the PDF at `path`.
///
/// Each page's text is concatenated with a trailing newline and the full
/// result is trimmed. Pages with no text layer contribute nothing. An
/// empty return value means the document had no extractable text at all.
pub fn extract_pdf_text(path: &Path) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_by_pages(path)?;
    Ok(assemble_pages(&pages))
}

/// Joins per-page text: each non-empty page followed by `\n`, whole result
/// trimmed.
fn assemble_pages(pages: &[String]) -> String {
    let mut text = String::new();
    for page in pages {
        if !page.is_empty() {
            text.push_str(page);
            text.push('\n');
        }
    }
    text.trim().to_string()
}
