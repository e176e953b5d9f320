//! All LLM prompt constants for the analysis pipeline.

/// Resume summarization prompt template. Replace `{resume_text}` before
/// sending.
pub const RESUME_SUMMARY_PROMPT_TEMPLATE: &str = r#"You are a professional resume parser.

Extract and summarize:
- Skills
- Experience summary
- Education
- Tools & technologies

Resume Text:
{resume_text}

Return clean bullet points."#;

/// Job-description summarization prompt template. Replace `{jd_text}`
/// before sending.
pub const JD_SUMMARY_PROMPT_TEMPLATE: &str = r#"Extract from the job description:
- Required skills
- Responsibilities
- Preferred qualifications

Job Description:
{jd_text}

Return clean bullet points."#;

/// Match assessment prompt template. Operates on the two *summaries*, not
/// the raw texts. Replace `{parsed_resume}` and `{parsed_jd}` before
/// sending.
pub const ATS_MATCH_PROMPT_TEMPLATE: &str = r#"You are an ATS system.

Compare resume and job description.

Resume:
{parsed_resume}

Job Description:
{parsed_jd}

STRICT FORMAT:
1. Match percentage (0-100)
2. Matching skills
3. Missing skills
4. Strengths
5. Improvement suggestions"#;

pub fn build_resume_summary_prompt(resume_text: &str) -> String {
    RESUME_SUMMARY_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}

pub fn build_jd_summary_prompt(jd_text: &str) -> String {
    JD_SUMMARY_PROMPT_TEMPLATE.replace("{jd_text}", jd_text)
}

pub fn build_ats_match_prompt(parsed_resume: &str, parsed_jd: &str) -> String {
    ATS_MATCH_PROMPT_TEMPLATE
        .replace("{parsed_resume}", parsed_resume)
        .replace("{parsed_jd}", parsed_jd)
}
