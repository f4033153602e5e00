// All LLM prompt constants for the skill-relevance pipeline.
// Two calls, two prompts: JD enumeration and resume-to-JD matching. Both
// demand a bare JSON array of strings and nothing else.

/// Shared system prompt — enforces JSON-array-only output.
pub const SKILL_PIPELINE_SYSTEM: &str = "You are a precise skill-matching assistant \
    for an applicant tracking system. \
    You MUST respond with a valid JSON array of strings only. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// JD enumeration prompt template. Replace `{jd_text}` before sending.
pub const JD_ENUMERATION_PROMPT_TEMPLATE: &str = r#"List every skill, technology, tool, methodology, and certification EXPLICITLY NAMED anywhere in the job description below.

Rules:
1. Be EXHAUSTIVE. Include skills named in section-headed lists, comma- or colon-separated lists, and narrative sentences alike.
2. When a skill appears as a full name with an abbreviation (e.g. "Azure Virtual Desktop (AVD)"), return BOTH the full name and the abbreviation as separate entries.
3. Include ONLY skills literally present in the text. Do NOT infer skills from activities — "daily stand-ups" does NOT imply "Agile" unless "Agile" itself is written.
4. Do NOT include soft requirements that are not named skills (e.g. "team player", "good communication" is a skill only if listed as one).
5. Return a JSON array of strings and nothing else.

JOB DESCRIPTION:
{jd_text}"#;

/// Skill matching prompt template. Replace `{payload}` with a JSON object
/// carrying `resume_skills` and `jd_skills` before sending.
pub const SKILL_MATCH_PROMPT_TEMPLATE: &str = r#"Given the candidate's resume skills and the skills named in a job description, return the resume skills that match a JD skill.

A resume skill matches when it is:
1. Case-insensitively identical to a JD skill, OR
2. A recognized variant or specialization of one — a versioned product matches its unversioned JD mention ("Python 3" matches "python"), a vendor-qualified database engine matches a generic "SQL" mention, a specific product matches its named product family, OR
3. Semantically equivalent under common professional-title aliasing (e.g. "program management" matches "project management").

Rules:
1. Be PRECISE, not generous: when a match is ambiguous, EXCLUDE the skill.
2. Return resume skills EXACTLY as they appear in `resume_skills`, original casing preserved. NEVER invent, reword, or merge skill names.
3. Return a JSON array of strings and nothing else. Return [] if nothing matches.

{payload}"#;
