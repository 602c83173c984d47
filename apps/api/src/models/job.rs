use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored job posting.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub external_id: Option<String>,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_url: Option<String>,
    /// Industry bucket, see `jobs::classify::Industry`.
    pub role: String,
    pub experience_level: String,
    pub skills_required: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A posting ready to be written to the store (from JSearch import).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewJob {
    pub external_id: String,
    pub job_title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub job_url: Option<String>,
    pub role: String,
    pub experience_level: String,
    pub skills_required: Vec<String>,
}
