//! The three-call generation pipeline behind `/analyze`.
//!
//! The resume and JD summaries are independent, so they fan out
//! concurrently; the match assessment joins on both before running. The
//! assessor sees only the two summaries, never the raw texts.

use serde::Serialize;

use crate::analysis::prompts::{
    build_ats_match_prompt, build_jd_summary_prompt, build_resume_summary_prompt,
};
use crate::errors::AppError;
use crate::llm_client::TextGenerator;

/// The three generated strings returned by a successful analysis.
#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    pub parsed_resume: String,
    pub parsed_job_description: String,
    pub ats_result: String,
}

pub async fn summarize_resume(
    llm: &dyn TextGenerator,
    resume_text: &str,
) -> Result<String, AppError> {
    let prompt = build_resume_summary_prompt(resume_text);
    Ok(llm.generate(&prompt).await?)
}

pub async fn summarize_job_description(
    llm: &dyn TextGenerator,
    jd_text: &str,
) -> Result<String, AppError> {
    let prompt = build_jd_summary_prompt(jd_text);
    Ok(llm.generate(&prompt).await?)
}

pub async fn assess_match(
    llm: &dyn TextGenerator,
    parsed_resume: &str,
    parsed_jd: &str,
) -> Result<String, AppError> {
    let prompt = build_ats_match_prompt(parsed_resume, parsed_jd);
    Ok(llm.generate(&prompt).await?)
}

/// Runs the full pipeline: both summaries concurrently, then the match
/// assessment over their outputs.
pub async fn run_analysis(
    llm: &dyn TextGenerator,
    resume_text: &str,
    jd_text: &str,
) -> Result<AnalysisResult, AppError> {
    let (parsed_resume, parsed_job_description) = tokio::try_join!(
        summarize_resume(llm, resume_text),
        summarize_job_description(llm, jd_text),
    )?;

    let ats_result = assess_match(llm, &parsed_resume, &parsed_job_description).await?;

    Ok(AnalysisResult {
        parsed_resume,
        parsed_job_description,
        ats_result,
    })
}
