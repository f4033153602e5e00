//! Read-only queries against the candidate record store. The pipeline never
//! writes back — results are returned to the caller, not persisted.

use sqlx::MySqlPool;
use tracing::info;

use crate::errors::AppError;
use crate::models::candidate::{AttachmentRow, CandidateRow};

/// Basic candidate profile from `mst_candidates`.
pub async fn get_candidate(
    pool: &MySqlPool,
    candidate_id: i64,
) -> Result<Option<CandidateRow>, AppError> {
    let row = sqlx::query_as::<_, CandidateRow>(
        r#"
        SELECT candidate_id, full_name, linkedin_profile, resume_content,
               sex, nationality, date_of_birth, company_id
        FROM mst_candidates
        WHERE candidate_id = ?
        "#,
    )
    .bind(candidate_id)
    .fetch_optional(pool)
    .await?;

    if let Some(candidate) = &row {
        info!(
            "Retrieved candidate {} ({})",
            candidate.candidate_id,
            candidate.full_name.as_deref().unwrap_or("unnamed")
        );
    }

    Ok(row)
}

/// Resume attachment metadata for a candidate: first resolve the company's
/// `Resume` attachment type in `adm_lookup_codes`, then the attachment row.
pub async fn get_resume_attachment(
    pool: &MySqlPool,
    candidate_id: i64,
    company_id: i64,
) -> Result<Option<AttachmentRow>, AppError> {
    let attachment_type: Option<i64> = sqlx::query_scalar(
        r#"
        SELECT lookup_type_id
        FROM adm_lookup_codes
        WHERE lookup_code = 'Resume' AND company_id = ?
        "#,
    )
    .bind(company_id)
    .fetch_optional(pool)
    .await?;

    let Some(attachment_type) = attachment_type else {
        info!("No 'Resume' attachment type configured for company {company_id}");
        return Ok(None);
    };

    let row = sqlx::query_as::<_, AttachmentRow>(
        r#"
        SELECT attachment_id, file_sub_directory, file_name
        FROM adm_attachments
        WHERE related_obj_pk = ?
          AND related_obj_name = 'Cnd'
          AND company_id = ?
          AND attachment_type = ?
        LIMIT 1
        "#,
    )
    .bind(candidate_id)
    .bind(company_id)
    .bind(attachment_type)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Job-description text for the requisition the candidate was submitted to.
pub async fn get_job_description(
    pool: &MySqlPool,
    candidate_id: i64,
) -> Result<Option<String>, AppError> {
    let jd: Option<Option<String>> = sqlx::query_scalar(
        r#"
        SELECT job_description
        FROM mst_requirements
        WHERE req_id = (
            SELECT req_id
            FROM adm_can_submissions
            WHERE candidate_id = ?
            LIMIT 1
        )
        "#,
    )
    .bind(candidate_id)
    .fetch_optional(pool)
    .await?;

    let jd = jd.flatten().filter(|t| !t.trim().is_empty());
    match &jd {
        Some(text) => info!("Retrieved job description ({} characters)", text.len()),
        None => info!("No job description found for candidate {candidate_id}"),
    }

    Ok(jd)
}
