use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use sqlx::PgPool;

use crate::config::Config;
use crate::jobs::jsearch::JSearchClient;
use crate::matching::engine::SkillEngine;
use crate::matching::ranking::RankingPolicy;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Uploaded resumes are archived here before matching.
    pub s3: S3Client,
    pub config: Config,
    /// Vocabulary and weights are fixed at startup and never mutated.
    pub engine: Arc<SkillEngine>,
    pub ranking: RankingPolicy,
    /// `None` when JSEARCH_API_KEY is not configured.
    pub jsearch: Option<JSearchClient>,
}
