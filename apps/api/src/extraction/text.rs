//! Document-to-text normalization.
//!
//! The pipeline only ever sees plain text; this module is the one place that
//! knows how a document becomes that text. PDFs go through `pdf-extract`;
//! anything else is treated as UTF-8 text (the record store's inline
//! `resume_content` arrives that way).

use std::path::Path;

use crate::errors::AppError;

pub fn extract_document_text(path: &Path) -> Result<String, AppError> {
    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));

    let text = if is_pdf {
        pdf_extract::extract_text(path)
            .map_err(|e| AppError::Validation(format!("Could not extract PDF text: {e}")))?
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| AppError::Validation(format!("Could not read document: {e}")))?
    };

    Ok(text)
}

/// Same normalization for in-memory uploads: PDF bytes are routed through a
/// temp file (pdf-extract reads from a path), text bytes are decoded as UTF-8.
pub fn extract_upload_text(file_name: &str, data: &[u8]) -> Result<String, AppError> {
    if file_name.to_ascii_lowercase().ends_with(".pdf") {
        let mut tmp = tempfile::Builder::new()
            .suffix(".pdf")
            .tempfile()
            .map_err(|e| AppError::Internal(e.into()))?;
        std::io::Write::write_all(&mut tmp, data).map_err(|e| AppError::Internal(e.into()))?;
        extract_document_text(tmp.path())
    } else {
        String::from_utf8(data.to_vec())
            .map_err(|_| AppError::Validation("Document is not valid UTF-8 text".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_plain_text_file_read_verbatim() {
        let mut tmp = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(tmp, "Jane Doe\nSkills: Python").unwrap();
        let text = extract_document_text(tmp.path()).unwrap();
        assert_eq!(text, "Jane Doe\nSkills: Python");
    }

    #[test]
    fn test_upload_text_decodes_utf8() {
        let text = extract_upload_text("resume.txt", b"r\xc3\xa9sum\xc3\xa9").unwrap();
        assert_eq!(text, "résumé");
    }

    #[test]
    fn test_upload_text_rejects_invalid_utf8() {
        let err = extract_upload_text("resume.txt", &[0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
