//! Axum route handler for resume matching.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::documents::archive::archive_resume;
use crate::documents::{extract_text, DocumentKind, ExtractError};
use crate::errors::AppError;
use crate::jobs::store::list_jobs;
use crate::matching::ranking::{rank_postings, JobMatch};
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResumeResponse {
    /// Sorted for stable output; the engine itself returns an unordered set.
    pub resume_skills: Vec<String>,
    pub top_matches: Vec<JobMatch>,
}

/// A validated resume upload.
#[derive(Debug)]
pub struct ResumeUpload {
    pub filename: String,
    pub kind: DocumentKind,
    pub bytes: Vec<u8>,
}

/// Pulls the `resume` field out of the form and validates name, type and size.
pub async fn read_resume_upload(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.trim().is_empty() {
            return Err(AppError::Validation("Empty filename".to_string()));
        }
        let kind = DocumentKind::from_filename(&filename)
            .ok_or_else(|| AppError::Validation("Invalid file type".to_string()))?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        if bytes.is_empty() {
            return Err(AppError::Validation("Uploaded resume is empty".to_string()));
        }

        return Ok(ResumeUpload {
            filename,
            kind,
            bytes: bytes.to_vec(),
        });
    }

    Err(AppError::Validation("No resume uploaded".to_string()))
}

/// POST /match-resume
///
/// Multipart upload (field `resume`, .pdf or .docx). Extracts skills from the
/// document and returns the best-matching stored postings.
pub async fn handle_match_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MatchResumeResponse>, AppError> {
    let upload = read_resume_upload(multipart).await?;

    archive_resume(
        &state.s3,
        &state.config.s3_bucket,
        &upload.filename,
        upload.kind,
        upload.bytes.clone(),
    )
    .await
    .map_err(|e| AppError::S3(e.to_string()))?;

    // PDF parsing is CPU-bound and may panic on hostile input
    let kind = upload.kind;
    let text = tokio::task::spawn_blocking(move || extract_text(kind, &upload.bytes))
        .await
        .map_err(|e| match kind {
            DocumentKind::Pdf => ExtractError::Pdf(e.to_string()),
            DocumentKind::Docx => ExtractError::Docx(e.to_string()),
        })??;

    let resume_skills = state.engine.normalize_and_extract(&text);
    let jobs = list_jobs(&state.db).await?;
    let top_matches = rank_postings(&state.engine, &resume_skills, &jobs, state.ranking);

    info!(
        skills = resume_skills.len(),
        postings = jobs.len(),
        returned = top_matches.len(),
        "Matched resume '{}'",
        upload.filename
    );

    let mut resume_skills: Vec<String> = resume_skills.into_iter().collect();
    resume_skills.sort();

    Ok(Json(MatchResumeResponse {
        resume_skills,
        top_matches,
    }))
}
