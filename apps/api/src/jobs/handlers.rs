//! Axum route handlers for the job store.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::jobs::dashboard::{build_dashboard, DashboardReport};
use crate::jobs::store::{list_jobs, upsert_jobs};
use crate::models::job::JobRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ImportJobsRequest {
    pub query: String,
    #[serde(default = "first_page")]
    pub page: u32,
}

fn first_page() -> u32 {
    1
}

#[derive(Debug, Serialize)]
pub struct ImportJobsResponse {
    pub fetched: usize,
    pub written: u64,
}

/// GET /jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobRow>>, AppError> {
    Ok(Json(list_jobs(&state.db).await?))
}

/// GET /dashboard
pub async fn handle_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardReport>, AppError> {
    let jobs = list_jobs(&state.db).await?;
    Ok(Json(build_dashboard(jobs)))
}

/// POST /jobs/import
///
/// Pulls one page of postings from JSearch, classifies them and upserts them.
pub async fn handle_import_jobs(
    State(state): State<AppState>,
    Json(request): Json<ImportJobsRequest>,
) -> Result<Json<ImportJobsResponse>, AppError> {
    if request.query.trim().is_empty() {
        return Err(AppError::Validation("query cannot be empty".to_string()));
    }
    let client = state
        .jsearch
        .as_ref()
        .ok_or_else(|| AppError::Unavailable("Job import is not configured".to_string()))?;

    let jobs = client
        .search(request.query.trim(), request.page.max(1), &state.engine)
        .await?;
    let written = upsert_jobs(&state.db, &jobs).await?;

    info!(
        "Imported {} postings for '{}' (page {})",
        jobs.len(),
        request.query,
        request.page
    );

    Ok(Json(ImportJobsResponse {
        fetched: jobs.len(),
        written,
    }))
}
