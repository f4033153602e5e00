// All LLM prompt constants for the structured-extraction call.
// The JSON schema block is NOT written out here — it is generated from the
// typed definitions in `models::resume` so prompt and parser cannot drift.

/// System prompt for resume extraction — enforces strict, JSON-only output.
pub const EXTRACTION_SYSTEM: &str = "You are a STRICT ATS resume parser. \
    You extract structured data ONLY from the provided resume text. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Extraction prompt template. Replace `{schema}` and `{resume_text}` before
/// sending.
pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"Extract structured data from the resume text below.

STRICT RULES (must follow):
1. Extract ONLY information that is explicitly and clearly present in the resume.
2. DO NOT guess, infer, assume, normalize, or fabricate any values under any circumstances.
3. If a value is not available, return an empty string ("") or empty list ([]) as appropriate.
4. NEVER include duplicated entries or repeated sections.
5. Return VALID JSON ONLY that strictly matches the schema.

SECTION HANDLING:
- Treat sections such as "SKILLS", "KEY COMPETENCIES", "CORE SKILLS", or similar as SKILLS.
- Treat sections such as "EXPERIENCE", "WORK EXPERIENCE", or "PROFESSIONAL EXPERIENCE" as EXPERIENCE.
- Treat addresses only if explicitly written as a location or address.

EDUCATION RULES:
- Extract all education entries explicitly stated.
- Identify the highest degree by comparing degree titles ONLY, and set `is_highest` to true for exactly that one entry.
- Copy dates EXACTLY as written: a single year stays a single year; a range (e.g. "2025 - 2029") stays the full range string.
- Do NOT split ranges, infer missing start/end years, or reformat dates.
- Leave `year_passed` empty if no date is mentioned.

EXPERIENCE RULES:
- Extract all clearly written job entries in reverse chronological order (most recent first).
- Use "Present" only if explicitly written.
- If multiple roles at the same company exist, treat them as separate entries.
- Projects must belong ONLY to the experience entry they are described under; do NOT guess project names.
- Leave `last_pay_rate`, `pay_uom`, and `last_hike_date` empty unless clearly mentioned.

SKILLS RULES:
- Extract every clearly mentioned skill or tool as a distinct entry.
- Do NOT group unrelated tools or platforms under a single skill name.
- Skills differing only in case or punctuation are the SAME skill — keep one entry.
- Use `skillset_type` only if explicitly given (e.g. "Technical", "Soft Skills").
- Leave `years` and `last_used` blank unless those values are stated with the skill.

ADDRESS RULES:
- Extract only addresses, locations, or place names explicitly present.
- Do NOT infer address timelines; leave `start_date_active` and `end_date_active` empty.

OUTPUT FORMAT:
Return a SINGLE JSON object using EXACTLY this schema:

{schema}

Resume Text:
{resume_text}"#;
