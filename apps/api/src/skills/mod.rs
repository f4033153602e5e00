//! Skill-Relevance Pipeline — narrows a candidate's extracted skills to the
//! ones a job description actually names.
//!
//! Two oracle calls, one fixed step order: enumerate the JD's skill
//! vocabulary, match resume skills against it, retain matching entries.
//! The pipeline fails toward showing LESS: any oracle failure degrades to
//! an empty result with a warning, never to an error and never to an
//! unfiltered passthrough. A hidden skill is recoverable; an irrelevant
//! skill presented as relevant is not.

pub mod oracle;
pub mod prompts;

use std::collections::BTreeSet;

use tracing::warn;

use crate::models::resume::SkillEntry;
use crate::skills::oracle::SkillOracle;

/// Enumerates every skill the JD text literally names, normalized to
/// lowercased, trimmed form. Empty input short-circuits without an oracle
/// call; an oracle failure degrades to an empty set.
pub async fn enumerate_jd_skills(oracle: &dyn SkillOracle, jd_text: &str) -> BTreeSet<String> {
    if jd_text.trim().is_empty() {
        return BTreeSet::new();
    }

    match oracle.enumerate(jd_text).await {
        Ok(names) => names
            .into_iter()
            .map(|n| n.trim().to_lowercase())
            .filter(|n| !n.is_empty())
            .collect(),
        Err(e) => {
            warn!("JD skill enumeration failed, treating JD as naming no skills: {e}");
            BTreeSet::new()
        }
    }
}

/// Matches resume skill names against the JD vocabulary. The reply is
/// re-checked against `resume_skills`: whatever the oracle says, no name
/// leaves this function unless the resume contained it verbatim.
pub async fn match_skills(
    oracle: &dyn SkillOracle,
    resume_skills: &[String],
    jd_skills: &BTreeSet<String>,
) -> Vec<String> {
    if resume_skills.is_empty() || jd_skills.is_empty() {
        return Vec::new();
    }

    let jd: Vec<String> = jd_skills.iter().cloned().collect();
    match oracle.match_against(resume_skills, &jd).await {
        Ok(matched) => matched
            .into_iter()
            .filter(|m| resume_skills.contains(m))
            .collect(),
        Err(e) => {
            warn!("Skill matching failed, treating as no matches: {e}");
            Vec::new()
        }
    }
}

/// Filters a skill list down to the entries relevant to the JD.
///
/// Empty JD text means no filtering was requested — the list passes through
/// untouched. A non-empty JD in which the enumerator finds nothing (whether
/// the text names no skills or the call failed) drops the whole list:
/// when unsure, show nothing.
pub async fn filter_skills_by_jd(
    oracle: &dyn SkillOracle,
    skills: Vec<SkillEntry>,
    jd_text: &str,
) -> Vec<SkillEntry> {
    if jd_text.trim().is_empty() {
        return skills;
    }

    let jd_skills = enumerate_jd_skills(oracle, jd_text).await;
    if jd_skills.is_empty() {
        warn!(
            "No skills found in job description; dropping all {} resume skill(s)",
            skills.len()
        );
        return Vec::new();
    }

    let names: Vec<String> = skills
        .iter()
        .map(|s| s.skill_name.clone())
        .filter(|n| !n.is_empty())
        .collect();

    let matched = match_skills(oracle, &names, &jd_skills).await;

    // Exact string identity against the matched names — resume order kept.
    skills
        .into_iter()
        .filter(|s| matched.iter().any(|m| *m == s.skill_name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;

    /// Deterministic stand-in for the generation service: enumeration and
    /// match replies are fixed at construction.
    struct StubOracle {
        jd_reply: Vec<String>,
        match_reply: Vec<String>,
    }

    #[async_trait]
    impl SkillOracle for StubOracle {
        async fn enumerate(&self, _jd_text: &str) -> Result<Vec<String>, LlmError> {
            Ok(self.jd_reply.clone())
        }

        async fn match_against(
            &self,
            _resume_skills: &[String],
            _jd_skills: &[String],
        ) -> Result<Vec<String>, LlmError> {
            Ok(self.match_reply.clone())
        }
    }

    /// Oracle whose every call fails with a transport error.
    struct FailingOracle;

    #[async_trait]
    impl SkillOracle for FailingOracle {
        async fn enumerate(&self, _jd_text: &str) -> Result<Vec<String>, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "upstream unavailable".to_string(),
            })
        }

        async fn match_against(
            &self,
            _resume_skills: &[String],
            _jd_skills: &[String],
        ) -> Result<Vec<String>, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "upstream unavailable".to_string(),
            })
        }
    }

    /// Pathological oracle that answers with names the resume never had.
    struct SynthesizingOracle;

    #[async_trait]
    impl SkillOracle for SynthesizingOracle {
        async fn enumerate(&self, _jd_text: &str) -> Result<Vec<String>, LlmError> {
            Ok(vec!["python".to_string()])
        }

        async fn match_against(
            &self,
            _resume_skills: &[String],
            _jd_skills: &[String],
        ) -> Result<Vec<String>, LlmError> {
            Ok(vec!["Python".to_string(), "Machine Learning".to_string()])
        }
    }

    fn skill_list(names: &[&str]) -> Vec<SkillEntry> {
        names.iter().map(|&n| SkillEntry::named(n)).collect()
    }

    fn skill_names(skills: &[SkillEntry]) -> Vec<&str> {
        skills.iter().map(|s| s.skill_name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_empty_jd_text_passes_skills_through_unfiltered() {
        let oracle = FailingOracle; // must not even be called
        let skills = skill_list(&["Python", "SQL"]);
        let filtered = filter_skills_by_jd(&oracle, skills.clone(), "   ").await;
        assert_eq!(filtered, skills);
    }

    #[tokio::test]
    async fn test_jd_naming_no_skills_drops_entire_list() {
        let oracle = StubOracle {
            jd_reply: vec![],
            match_reply: vec![],
        };
        let filtered = filter_skills_by_jd(
            &oracle,
            skill_list(&["Python", "SQL"]),
            "We value team players.",
        )
        .await;
        assert!(filtered.is_empty());
    }

    #[tokio::test]
    async fn test_enumeration_transport_error_degrades_to_empty_list() {
        let filtered = filter_skills_by_jd(
            &FailingOracle,
            skill_list(&["Python", "SQL"]),
            "Required: Python, SQL.",
        )
        .await;
        assert!(filtered.is_empty());
    }

    #[tokio::test]
    async fn test_enumeration_normalizes_and_collapses_duplicates() {
        let oracle = StubOracle {
            jd_reply: vec![
                "SCCM".to_string(),
                "Sccm".to_string(),
                "  Jira ".to_string(),
                "".to_string(),
            ],
            match_reply: vec![],
        };
        let jd_skills = enumerate_jd_skills(&oracle, "SCCM and Sccm and Jira").await;
        let expected: BTreeSet<String> =
            ["sccm".to_string(), "jira".to_string()].into_iter().collect();
        assert_eq!(jd_skills, expected);
    }

    #[tokio::test]
    async fn test_enumeration_empty_input_skips_oracle() {
        // FailingOracle would error if called; empty input must not reach it.
        let jd_skills = enumerate_jd_skills(&FailingOracle, "").await;
        assert!(jd_skills.is_empty());
    }

    #[tokio::test]
    async fn test_matcher_output_is_subset_of_resume_names() {
        let resume = vec!["Python 3".to_string(), "Excel".to_string()];
        let jd: BTreeSet<String> = ["python".to_string()].into_iter().collect();
        let oracle = StubOracle {
            jd_reply: vec![],
            match_reply: vec!["Python 3".to_string()],
        };
        let matched = match_skills(&oracle, &resume, &jd).await;
        assert_eq!(matched, vec!["Python 3".to_string()]);
    }

    #[tokio::test]
    async fn test_matcher_never_emits_synthesized_names() {
        let resume = vec!["Python".to_string()];
        let jd: BTreeSet<String> = ["python".to_string()].into_iter().collect();
        let matched = match_skills(&SynthesizingOracle, &resume, &jd).await;
        // "Machine Learning" came from the oracle, not the resume — dropped.
        assert_eq!(matched, vec!["Python".to_string()]);
    }

    #[tokio::test]
    async fn test_matcher_empty_inputs_skip_oracle() {
        let jd: BTreeSet<String> = ["python".to_string()].into_iter().collect();
        assert!(match_skills(&FailingOracle, &[], &jd).await.is_empty());
        assert!(
            match_skills(&FailingOracle, &["Python".to_string()], &BTreeSet::new())
                .await
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_avd_end_to_end_scenario() {
        let oracle = StubOracle {
            jd_reply: vec![
                "Azure Virtual Desktop".to_string(),
                "AVD".to_string(),
                "Jira".to_string(),
            ],
            match_reply: vec!["Azure Virtual Desktop".to_string()],
        };
        let filtered = filter_skills_by_jd(
            &oracle,
            skill_list(&["Azure Virtual Desktop", "Excel"]),
            "Required: Azure Virtual Desktop (AVD), Jira.",
        )
        .await;
        assert_eq!(skill_names(&filtered), vec!["Azure Virtual Desktop"]);
    }

    #[tokio::test]
    async fn test_entries_with_empty_names_are_discarded_before_matching() {
        let oracle = StubOracle {
            jd_reply: vec!["python".to_string()],
            match_reply: vec!["Python".to_string()],
        };
        let mut skills = skill_list(&["Python"]);
        skills.push(SkillEntry::default()); // empty skill_name
        let filtered =
            filter_skills_by_jd(&oracle, skills, "Required: Python.").await;
        assert_eq!(skill_names(&filtered), vec!["Python"]);
    }

    #[tokio::test]
    async fn test_filtering_is_idempotent() {
        let oracle = StubOracle {
            jd_reply: vec!["python".to_string()],
            match_reply: vec!["Python".to_string()],
        };
        let jd = "Required: Python.";
        let once =
            filter_skills_by_jd(&oracle, skill_list(&["Python", "Excel"]), jd).await;
        let twice = filter_skills_by_jd(&oracle, once.clone(), jd).await;
        assert_eq!(once, twice);
        assert_eq!(skill_names(&once), vec!["Python"]);
    }

    #[tokio::test]
    async fn test_filter_retains_resume_order() {
        let oracle = StubOracle {
            jd_reply: vec!["sql".to_string(), "python".to_string()],
            // Oracle order differs from resume order on purpose.
            match_reply: vec!["SQL".to_string(), "Python".to_string()],
        };
        let filtered = filter_skills_by_jd(
            &oracle,
            skill_list(&["Python", "Excel", "SQL"]),
            "Required: Python, SQL.",
        )
        .await;
        assert_eq!(skill_names(&filtered), vec!["Python", "SQL"]);
    }
}
