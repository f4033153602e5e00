//! Structured Extraction Engine — one schema-constrained LLM call turning
//! resume text into typed sections.
//!
//! Unlike the skill filter, a failure here is fatal: there is no sensible
//! empty-record fallback for the primary extraction, so transport,
//! rate-limit, and parse errors all propagate to the caller.

use crate::errors::AppError;
use crate::extraction::prompts::{EXTRACTION_PROMPT_TEMPLATE, EXTRACTION_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::resume::{
    AddressEntry, EducationEntry, ExperienceEntry, ProjectEntry, SkillEntry, StructuredFields,
};

/// The JSON schema block embedded in the extraction prompt, generated from
/// the same types that deserialize the reply. A field added to the model
/// shows up here without touching the prompt text.
pub fn schema_block() -> String {
    let example = StructuredFields {
        education: vec![EducationEntry::default()],
        experience: vec![ExperienceEntry {
            projects: vec![ProjectEntry::default()],
            ..Default::default()
        }],
        skills: vec![SkillEntry::default()],
        addresses: vec![AddressEntry::default()],
    };
    serde_json::to_string_pretty(&example).expect("schema example serializes")
}

pub async fn extract_structured_fields(
    llm: &LlmClient,
    resume_text: &str,
) -> Result<StructuredFields, AppError> {
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Resume text is empty — nothing to extract".to_string(),
        ));
    }

    let prompt = EXTRACTION_PROMPT_TEMPLATE
        .replace("{schema}", &schema_block())
        .replace("{resume_text}", resume_text);

    llm.call_json::<StructuredFields>(&prompt, EXTRACTION_SYSTEM)
        .await
        .map_err(|e| {
            let kind = match &e {
                LlmError::Parse(_) | LlmError::EmptyContent => "malformed reply",
                LlmError::Http(_) => "connectivity",
                e if e.is_rate_limit() => "rate limited",
                LlmError::Api { .. } | LlmError::RateLimited { .. } => "api error",
            };
            AppError::Llm(format!("Structured extraction failed ({kind}): {e}"))
        })
}
