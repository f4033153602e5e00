//! Row types for the candidate record store and the schema-mapped result
//! returned by the end-to-end candidate endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::resume::{AddressEntry, EducationEntry, ExperienceEntry, ParsedResume, SkillEntry};

/// Basic candidate profile from `mst_candidates`.
#[derive(Debug, Clone, FromRow)]
pub struct CandidateRow {
    pub candidate_id: i64,
    pub full_name: Option<String>,
    pub linkedin_profile: Option<String>,
    pub resume_content: Option<String>,
    pub sex: Option<String>,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub company_id: i64,
}

impl CandidateRow {
    /// True when the profile carries inline resume text usable as a fallback
    /// for a missing or undownloadable attachment.
    pub fn has_resume_content(&self) -> bool {
        self.resume_content
            .as_deref()
            .is_some_and(|c| !c.trim().is_empty())
    }
}

/// Resume attachment metadata from `adm_attachments`.
#[derive(Debug, Clone, FromRow)]
pub struct AttachmentRow {
    pub attachment_id: i64,
    pub file_sub_directory: String,
    pub file_name: String,
}

/// Attachment metadata echoed into the result payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeFileInfo {
    pub attachment_id: i64,
    pub file_name: String,
    pub file_sub_directory: String,
}

impl From<&AttachmentRow> for ResumeFileInfo {
    fn from(row: &AttachmentRow) -> Self {
        Self {
            attachment_id: row.attachment_id,
            file_name: row.file_name.clone(),
            file_sub_directory: row.file_sub_directory.clone(),
        }
    }
}

/// Parsed resume data mapped onto the candidate-store schema. Profile
/// fields come from `mst_candidates` with parse-derived fallbacks
/// (`linkedin_url` and `date_of_birth` prefer the resume when present);
/// section lists come from parsing only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateParseResult {
    pub candidate_id: i64,
    pub company_id: i64,
    pub full_name: Option<String>,
    pub linkedin_profile: Option<String>,
    pub sex: Option<String>,
    pub nationality: Option<String>,
    pub date_of_birth: Option<String>,
    pub emails: Vec<String>,
    pub contact_numbers: Vec<String>,
    pub addresses: Vec<AddressEntry>,
    pub skills: Vec<SkillEntry>,
    pub education: Vec<EducationEntry>,
    pub work_experience: Vec<ExperienceEntry>,
    pub resume_file: Option<ResumeFileInfo>,
    pub job_description: Option<String>,
    pub parsed_data: ParsedResume,
}

impl CandidateParseResult {
    pub fn build(
        candidate: &CandidateRow,
        attachment: Option<&AttachmentRow>,
        job_description: Option<String>,
        parsed: ParsedResume,
    ) -> Self {
        Self {
            candidate_id: candidate.candidate_id,
            company_id: candidate.company_id,
            full_name: candidate.full_name.clone(),
            linkedin_profile: parsed
                .linkedin_url
                .clone()
                .or_else(|| candidate.linkedin_profile.clone()),
            sex: candidate.sex.clone(),
            nationality: candidate.nationality.clone(),
            date_of_birth: parsed
                .date_of_birth
                .clone()
                .or_else(|| candidate.date_of_birth.map(|d| d.to_string())),
            emails: parsed.emails.clone(),
            contact_numbers: parsed.contact_numbers.clone(),
            addresses: parsed.addresses.clone(),
            skills: parsed.skills.clone(),
            education: parsed.education.clone(),
            work_experience: parsed.experience.clone(),
            resume_file: attachment.map(ResumeFileInfo::from),
            job_description,
            parsed_data: parsed,
        }
    }
}
