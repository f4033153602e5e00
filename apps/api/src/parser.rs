//! Orchestrator — sequences the full parsing pipeline for one document.
//!
//! Stage order is fixed: regex contact fields → structured extraction →
//! JD skill filtering. The three generation calls run sequentially because
//! each later call consumes the earlier call's output.

use tracing::info;

use crate::errors::AppError;
use crate::extraction::fields;
use crate::extraction::structured::extract_structured_fields;
use crate::llm_client::LlmClient;
use crate::models::resume::{ParsedResume, StructuredFields};
use crate::skills::filter_skills_by_jd;
use crate::skills::oracle::SkillOracle;

/// Parses normalized resume text into a full `ParsedResume`, optionally
/// narrowing the skill list to a job description.
///
/// Contact fields come from the regex layer; the model supplies the section
/// lists. A `jd_text` of `None` (or blank text) leaves the skill list
/// unfiltered; a failed structured extraction aborts the whole parse.
pub async fn parse_resume(
    llm: &LlmClient,
    oracle: &dyn SkillOracle,
    resume_text: &str,
    jd_text: Option<&str>,
) -> Result<ParsedResume, AppError> {
    let structured = extract_structured_fields(llm, resume_text).await?;
    let mut resume = merge(resume_text, structured);

    if let Some(jd) = jd_text {
        let before = resume.skills.len();
        resume.skills = filter_skills_by_jd(oracle, resume.skills, jd).await;
        info!(
            "JD filter kept {} of {} skill(s)",
            resume.skills.len(),
            before
        );
    }

    Ok(resume)
}

fn merge(resume_text: &str, structured: StructuredFields) -> ParsedResume {
    ParsedResume {
        emails: fields::extract_emails(resume_text),
        contact_numbers: fields::extract_phone_numbers(resume_text),
        linkedin_url: fields::extract_linkedin(resume_text),
        date_of_birth: fields::extract_dob(resume_text),
        education: structured.education,
        experience: structured.experience,
        skills: structured.skills,
        addresses: structured.addresses,
    }
}
