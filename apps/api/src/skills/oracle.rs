//! Skill Oracle — pluggable, trait-based backend for the two skill-pipeline
//! calls: JD enumeration and resume-to-JD matching.
//!
//! Default: `LlmSkillOracle` (generation service, temperature 0).
//! Tests: stub oracles with fixed mappings — the filter's contract
//! (precision-biased, subset-only, fail-to-empty) must hold for any backend.
//!
//! `AppState` holds an `Arc<dyn SkillOracle>`.

use async_trait::async_trait;

use crate::llm_client::{LlmClient, LlmError};
use crate::skills::prompts::{
    JD_ENUMERATION_PROMPT_TEMPLATE, SKILL_MATCH_PROMPT_TEMPLATE, SKILL_PIPELINE_SYSTEM,
};

/// The oracle trait. Both methods are fallible; the fail-open-to-empty
/// policy is applied by the wrappers in `skills`, not here, so every
/// backend stays a plain transcription of its own protocol.
#[async_trait]
pub trait SkillOracle: Send + Sync {
    /// Every skill literally named in the JD text, in whatever casing the
    /// backend returns. Normalization happens in the caller.
    async fn enumerate(&self, jd_text: &str) -> Result<Vec<String>, LlmError>;

    /// The subset of `resume_skills` matching the JD vocabulary. Callers
    /// re-check the subset property; a backend reply is never trusted to
    /// honor it.
    async fn match_against(
        &self,
        resume_skills: &[String],
        jd_skills: &[String],
    ) -> Result<Vec<String>, LlmError>;
}

/// LLM-backed oracle. Each call is one generation request expecting a bare
/// JSON array of strings; any other reply shape surfaces as `LlmError::Parse`.
pub struct LlmSkillOracle {
    llm: LlmClient,
}

impl LlmSkillOracle {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl SkillOracle for LlmSkillOracle {
    async fn enumerate(&self, jd_text: &str) -> Result<Vec<String>, LlmError> {
        let prompt = JD_ENUMERATION_PROMPT_TEMPLATE.replace("{jd_text}", jd_text);
        self.llm
            .call_json::<Vec<String>>(&prompt, SKILL_PIPELINE_SYSTEM)
            .await
    }

    async fn match_against(
        &self,
        resume_skills: &[String],
        jd_skills: &[String],
    ) -> Result<Vec<String>, LlmError> {
        let payload = serde_json::json!({
            "resume_skills": resume_skills,
            "jd_skills": jd_skills,
        });
        let prompt = SKILL_MATCH_PROMPT_TEMPLATE.replace("{payload}", &payload.to_string());
        self.llm
            .call_json::<Vec<String>>(&prompt, SKILL_PIPELINE_SYSTEM)
            .await
    }
}
