//! Fixed-pattern contact-field extraction.
//!
//! These fields never go through the LLM: emails, phone numbers, the
//! LinkedIn URL, and the date of birth are pattern-matched directly from the
//! normalized text. Duplicates collapse keeping first-occurrence order so
//! repeated runs over the same text give identical output.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+").unwrap());

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\+?\d{1,3}[\s-]?)?(?:\d[\s-]?){8,9}\d").unwrap());

static LINKEDIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(https?://(?:www\.)?linkedin\.com/[^\s]+)").unwrap());

static DOB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(DOB|Date of Birth)[:\s]*(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})").unwrap()
});

pub fn extract_emails(text: &str) -> Vec<String> {
    dedup_matches(EMAIL_RE.find_iter(text).map(|m| m.as_str().to_string()))
}

pub fn extract_phone_numbers(text: &str) -> Vec<String> {
    dedup_matches(
        PHONE_RE
            .find_iter(text)
            .map(|m| m.as_str().trim().to_string()),
    )
}

pub fn extract_linkedin(text: &str) -> Option<String> {
    LINKEDIN_RE
        .captures(text)
        .map(|c| c[1].to_string())
}

/// Date of birth as written in the source, e.g. "12/08/1994". Matched only
/// behind an explicit "DOB" / "Date of Birth" label so year ranges in
/// education sections are never mistaken for one.
pub fn extract_dob(text: &str) -> Option<String> {
    DOB_RE.captures(text).map(|c| c[2].to_string())
}

fn dedup_matches(matches: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = Vec::new();
    for m in matches {
        if !seen.contains(&m) {
            seen.push(m);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "\
        Jane Doe\n\
        jane.doe@example.com | jane.doe@example.com | +91 98765 43210\n\
        https://www.linkedin.com/in/janedoe profile\n\
        DOB: 12/08/1994\n\
        EDUCATION\n\
        B.Tech, 2015 - 2019\n";

    #[test]
    fn test_emails_dedup_preserving_order() {
        let emails = extract_emails(FIXTURE);
        assert_eq!(emails, vec!["jane.doe@example.com".to_string()]);
    }

    #[test]
    fn test_phone_number_found_and_trimmed() {
        let phones = extract_phone_numbers("Call +91 98765 43210 today");
        assert_eq!(phones, vec!["+91 98765 43210".to_string()]);
    }

    #[test]
    fn test_phone_extraction_ignores_year_ranges() {
        // "2015 - 2019" carries only eight digits; the pattern needs at
        // least nine, so education date ranges never surface as phones.
        let phones = extract_phone_numbers(FIXTURE);
        assert_eq!(phones, vec!["+91 98765 43210".to_string()]);
        assert!(extract_phone_numbers("B.Tech, 2015 - 2019\nMBA, 2020-2022").is_empty());
    }

    #[test]
    fn test_linkedin_first_match() {
        assert_eq!(
            extract_linkedin(FIXTURE).as_deref(),
            Some("https://www.linkedin.com/in/janedoe")
        );
        assert_eq!(extract_linkedin("no links here"), None);
    }

    #[test]
    fn test_dob_requires_label() {
        assert_eq!(extract_dob(FIXTURE).as_deref(), Some("12/08/1994"));
        // A bare date without the label is not a DOB.
        assert_eq!(extract_dob("joined 12/08/1994"), None);
    }

    #[test]
    fn test_dob_label_is_case_insensitive() {
        assert_eq!(
            extract_dob("date of birth: 1-2-1990").as_deref(),
            Some("1-2-1990")
        );
    }

    #[test]
    fn test_empty_text_yields_empty_results() {
        assert!(extract_emails("").is_empty());
        assert!(extract_phone_numbers("").is_empty());
        assert!(extract_linkedin("").is_none());
        assert!(extract_dob("").is_none());
    }
}
