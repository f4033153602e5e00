//! Parse endpoints: direct multipart upload, and the end-to-end candidate
//! flow against the record store.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::text::{extract_document_text, extract_upload_text};
use crate::models::candidate::CandidateParseResult;
use crate::models::resume::ParsedResume;
use crate::parser::parse_resume;
use crate::state::AppState;
use crate::store::{attachments, candidates};

/// POST /api/v1/parse
///
/// Multipart form: a `resume` file part (PDF or plain text) and an optional
/// `jd_text` text part. With `jd_text` present the skill list is narrowed to
/// the JD; without it the list passes through unfiltered.
pub async fn handle_parse_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParsedResume>, AppError> {
    let mut resume: Option<(String, Vec<u8>)> = None;
    let mut jd_text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().map(|n| n.to_string());
        match name.as_deref() {
            Some("resume") => {
                let file_name = field.file_name().unwrap_or("resume.txt").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
                resume = Some((file_name, data.to_vec()));
            }
            Some("jd_text") => {
                jd_text = Some(field.text().await.map_err(|e| {
                    AppError::Validation(format!("Could not read jd_text field: {e}"))
                })?);
            }
            _ => {} // unknown parts are ignored
        }
    }

    let (file_name, data) =
        resume.ok_or_else(|| AppError::Validation("Missing 'resume' file part".to_string()))?;

    let text = extract_upload_text(&file_name, &data)?;
    let parsed = parse_resume(
        &state.llm,
        state.skill_oracle.as_ref(),
        &text,
        jd_text.as_deref(),
    )
    .await?;

    Ok(Json(parsed))
}

/// POST /api/v1/candidates/:id/parse
///
/// Looks the candidate up in the record store, resolves a readable resume
/// (file-server attachment first, inline `resume_content` as fallback),
/// fetches the requisition's job description, runs the pipeline, and maps
/// the result onto the store schema.
pub async fn handle_parse_candidate(
    State(state): State<AppState>,
    Path(candidate_id): Path<i64>,
) -> Result<Json<CandidateParseResult>, AppError> {
    let candidate = candidates::get_candidate(&state.db, candidate_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No candidate with id {candidate_id}")))?;

    let attachment =
        candidates::get_resume_attachment(&state.db, candidate_id, candidate.company_id).await?;

    if attachment.is_none() && !candidate.has_resume_content() {
        return Err(AppError::NotFound(format!(
            "No resume available for candidate {candidate_id}: \
             no attachment on the file server and no inline resume_content"
        )));
    }

    // Attachment first; inline resume_content only when the download fails.
    // The temp file must outlive text extraction — it is deleted on drop.
    let mut resume_text: Option<String> = None;
    if let Some(attachment) = &attachment {
        match attachments::download_resume(
            &state.file_server,
            &state.config.file_server_base_url,
            attachment,
        )
        .await
        {
            Ok(tmp) => resume_text = Some(extract_document_text(tmp.path())?),
            Err(e) if candidate.has_resume_content() => {
                warn!("Resume download failed, falling back to inline resume_content: {e}");
            }
            Err(e) => return Err(e),
        }
    }
    let resume_text = match resume_text {
        Some(text) => text,
        // has_resume_content was checked above
        None => candidate.resume_content.clone().unwrap_or_default(),
    };

    let jd_text = candidates::get_job_description(&state.db, candidate_id).await?;

    info!("Parsing resume for candidate {candidate_id}");
    let parsed = parse_resume(
        &state.llm,
        state.skill_oracle.as_ref(),
        &resume_text,
        jd_text.as_deref(),
    )
    .await?;

    Ok(Json(CandidateParseResult::build(
        &candidate,
        attachment.as_ref(),
        jd_text,
        parsed,
    )))
}
