use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_JSEARCH_URL: &str = "https://jsearch.p.rapidapi.com/search";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub s3_bucket: String,
    pub s3_endpoint: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    /// Job import is disabled when unset.
    pub jsearch_api_key: Option<String>,
    pub jsearch_url: String,
    pub port: u16,
    pub rust_log: String,
    pub senior_penalty: u32,
    pub top_matches: usize,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            s3_bucket: require_env("S3_BUCKET")?,
            s3_endpoint: require_env("S3_ENDPOINT")?,
            aws_access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            jsearch_api_key: std::env::var("JSEARCH_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            jsearch_url: std::env::var("JSEARCH_URL")
                .unwrap_or_else(|_| DEFAULT_JSEARCH_URL.to_string()),
            port: parse_env("PORT", 5000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            senior_penalty: parse_env("SENIOR_PENALTY", 10)?,
            top_matches: parse_env("TOP_MATCHES", 5)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}
