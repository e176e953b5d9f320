//! Axum route handler for the analysis endpoint.
//!
//! File I/O and PDF parsing are synchronous and CPU-bound, so they run
//! inside `tokio::task::spawn_blocking`; only the LLM calls stay on the
//! async executor.

use std::path::Path;

use axum::extract::{Multipart, State};
use axum::Json;

use crate::analysis::pipeline::{run_analysis, AnalysisResult};
use crate::errors::AppError;
use crate::extract::extract_pdf_text;
use crate::state::AppState;
use crate::storage::UploadGuard;

/// POST /analyze
///
/// Multipart form with a `resume` PDF and a `job_description` text field.
/// Validation gates fire in order, each with its own 400 message; the
/// first failure wins and nothing downstream runs.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let mut resume_filename: Option<String> = None;
    let mut resume_bytes: Option<Vec<u8>> = None;
    let mut job_description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let filename = field.file_name().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(e.to_string()))?;
                resume_filename = filename;
                resume_bytes = Some(bytes.to_vec());
            }
            Some("job_description") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(e.to_string()))?;
                job_description = Some(text);
            }
            _ => {} // unknown fields are ignored
        }
    }

    let bytes = match resume_bytes {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => return Err(AppError::Validation("Resume PDF is required".to_string())),
    };

    let filename = resume_filename
        .filter(|name| has_pdf_extension(name))
        .ok_or_else(|| AppError::Validation("Invalid PDF file".to_string()))?;

    let jd_text = job_description
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| AppError::Validation("Job description is required".to_string()))?;

    // CPU-bound store-and-extract — spawn_blocking to avoid blocking the
    // async executor.
    let upload_dir = state.config.upload_dir.clone();
    let resume_text =
        tokio::task::spawn_blocking(move || store_and_extract(&upload_dir, &filename, &bytes))
            .await
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}"))
            })??;

    let result = run_analysis(state.llm.as_ref(), &resume_text, &jd_text).await?;

    Ok(Json(result))
}

/// Writes the upload under a scope guard, extracts its text, and lets the
/// guard remove the file on every exit path. Synchronous by design:
/// callers run it via `spawn_blocking`.
fn store_and_extract(upload_dir: &Path, filename: &str, bytes: &[u8]) -> Result<String, AppError> {
    let upload = UploadGuard::store(upload_dir, filename, bytes)?;

    let resume_text = match extract_pdf_text(upload.path()) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("PDF extraction failed: {e}");
            return Err(AppError::Unreadable);
        }
    };

    if resume_text.is_empty() {
        return Err(AppError::Unreadable);
    }

    Ok(resume_text)
}

/// Case-insensitive `.pdf` extension check on the client-supplied name.
fn has_pdf_extension(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("pdf"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_extension_is_case_insensitive() {
        assert!(has_pdf_extension("resume.pdf"));
        assert!(has_pdf_extension("resume.PDF"));
        assert!(has_pdf_extension("resume.Pdf"));
    }

    #[test]
    fn non_pdf_extensions_are_rejected() {
        assert!(!has_pdf_extension("resume.docx"));
        assert!(!has_pdf_extension("resume.pdf.exe"));
        assert!(!has_pdf_extension("resume"));
        assert!(!has_pdf_extension(""));
    }

    #[test]
    fn store_and_extract_rejects_unparseable_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let err = store_and_extract(dir.path(), "resume.pdf", b"not a pdf").unwrap_err();
        assert!(matches!(err, AppError::Unreadable));
    }

    #[test]
    fn store_and_extract_cleans_up_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let _ = store_and_extract(dir.path(), "resume.pdf", b"not a pdf");
        assert!(
            std::fs::read_dir(dir.path()).unwrap().next().is_none(),
            "upload directory should be empty"
        );
    }
}
