//! Typed resume schema.
//!
//! These structs are the single source of truth for the extraction contract:
//! the same definitions deserialize the LLM reply AND generate the JSON
//! schema block embedded in the extraction prompt (see
//! `extraction::structured::schema_block`). Every date-like field stays a
//! verbatim string — "2025 - 2029" is returned exactly as written, never
//! parsed into calendar types or split into a range.

use serde::{Deserialize, Serialize};

/// One education entry. At most one entry per resume carries
/// `is_highest = true`, chosen by comparing degree titles only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub year_passed: String,
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub college_university: String,
    #[serde(default)]
    pub percentage: String,
    #[serde(default)]
    pub is_highest: bool,
}

/// A named project tied to one work-experience entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub project_details: String,
}

/// One work-experience entry, reverse-chronological in the extracted list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub last_pay_rate: String,
    #[serde(default)]
    pub pay_uom: String,
    #[serde(default)]
    pub last_hike_date: String,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
}

/// One extracted skill. `skill_name` is the matching key for the JD filter;
/// the extractor is responsible for collapsing case/punctuation duplicates,
/// so the filter treats the list as already de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    #[serde(default)]
    pub skillset_type: String,
    #[serde(default)]
    pub skill_name: String,
    #[serde(default)]
    pub years: String,
    #[serde(default)]
    pub last_used: String,
}

impl SkillEntry {
    pub fn named(name: &str) -> Self {
        Self {
            skill_name: name.to_string(),
            ..Default::default()
        }
    }
}

/// One address entry. Activity dates are extracted only when explicitly
/// written, which in practice means they stay empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressEntry {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub start_date_active: String,
    #[serde(default)]
    pub end_date_active: String,
}

/// The shape returned by the schema-constrained extraction call. Contact
/// fields are deliberately absent: the regex layer owns those, so a model
/// reply can never overwrite them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredFields {
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub addresses: Vec<AddressEntry>,
}

/// The full parsed record handed back to callers. Immutable once built;
/// serialization always emits every key — absent scalars are `null`,
/// absent lists `[]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub emails: Vec<String>,
    pub contact_numbers: Vec<String>,
    pub linkedin_url: Option<String>,
    pub date_of_birth: Option<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<SkillEntry>,
    pub addresses: Vec<AddressEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_resume_serializes_every_key() {
        let json = serde_json::to_value(ParsedResume::default()).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "emails",
            "contact_numbers",
            "linkedin_url",
            "date_of_birth",
            "education",
            "experience",
            "skills",
            "addresses",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert!(json["linkedin_url"].is_null());
        assert_eq!(json["emails"], serde_json::json!([]));
    }

    #[test]
    fn test_structured_fields_tolerates_missing_sections() {
        // A reply that drops a whole section still deserializes.
        let parsed: StructuredFields =
            serde_json::from_str(r#"{"skills": [{"skill_name": "Python"}]}"#).unwrap();
        assert_eq!(parsed.skills.len(), 1);
        assert_eq!(parsed.skills[0].skill_name, "Python");
        assert!(parsed.skills[0].skillset_type.is_empty());
        assert!(parsed.education.is_empty());
    }

    #[test]
    fn test_date_fields_stay_verbatim() {
        let entry: EducationEntry = serde_json::from_str(
            r#"{"degree": "B.Tech", "year_passed": "2025 - 2029", "is_highest": true}"#,
        )
        .unwrap();
        assert_eq!(entry.year_passed, "2025 - 2029");
    }

    #[test]
    fn test_experience_entry_round_trips_projects() {
        let json = r#"{
            "organization": "Acme",
            "job_title": "Engineer",
            "projects": [{"project_name": "Billing", "project_details": "Rewrote invoicing"}]
        }"#;
        let entry: ExperienceEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.projects.len(), 1);
        assert_eq!(entry.projects[0].project_name, "Billing");
        assert!(entry.start_date.is_empty());
    }
}
