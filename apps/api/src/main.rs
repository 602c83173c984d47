mod config;
mod db;
mod documents;
mod errors;
mod jobs;
mod matching;
mod models;
mod routes;
mod state;

use anyhow::Result;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::db::create_pool;
use crate::jobs::jsearch::JSearchClient;
use crate::matching::engine::SkillEngine;
use crate::matching::ranking::RankingPolicy;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (runs migrations)
    let db = create_pool(&config.database_url).await?;

    // Initialize S3 / MinIO for resume archiving
    let s3 = build_s3_client(&config).await;
    info!("S3 client initialized");

    // Built-in vocabulary and weights, immutable for the process lifetime
    let engine = Arc::new(SkillEngine::default());
    info!(
        "Skill engine loaded: {} phrases, {} weighted",
        engine.vocabulary().len(),
        engine.weights().len()
    );

    let ranking = RankingPolicy {
        senior_penalty: config.senior_penalty,
        top_n: config.top_matches,
    };

    let jsearch = match &config.jsearch_api_key {
        Some(key) => Some(JSearchClient::new(key.clone(), config.jsearch_url.clone())?),
        None => {
            warn!("JSEARCH_API_KEY not set; POST /jobs/import is disabled");
            None
        }
    };

    let state = AppState {
        db,
        s3,
        config: config.clone(),
        engine,
        ranking,
        jsearch,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(config: &Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &config.aws_access_key_id,
        &config.aws_secret_access_key,
        None,
        None,
        "skillmatch-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(credentials)
        .endpoint_url(&config.s3_endpoint)
        .load()
        .await;

    aws_sdk_s3::Client::new(&s3_config)
}
