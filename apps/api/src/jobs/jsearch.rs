//! JSearch (RapidAPI) client. Imports live postings into the job store.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::jobs::classify::{ExperienceLevel, Industry};
use crate::matching::engine::SkillEngine;
use crate::models::job::NewJob;

const RAPIDAPI_HOST: &str = "jsearch.p.rapidapi.com";

#[derive(Debug, Error)]
pub enum JSearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<JSearchPosting>,
}

/// The subset of a JSearch result this service stores.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JSearchPosting {
    pub job_id: String,
    pub job_title: String,
    pub employer_name: Option<String>,
    pub job_city: Option<String>,
    pub job_country: Option<String>,
    pub job_apply_link: Option<String>,
    pub job_description: Option<String>,
    pub job_required_skills: Option<Vec<String>>,
}

#[derive(Clone)]
pub struct JSearchClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl JSearchClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self, JSearchError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    /// Runs one search page and converts each result into a storable posting.
    pub async fn search(
        &self,
        query: &str,
        page: u32,
        engine: &SkillEngine,
    ) -> Result<Vec<NewJob>, JSearchError> {
        let page = page.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .header("X-RapidAPI-Key", &self.api_key)
            .header("X-RapidAPI-Host", RAPIDAPI_HOST)
            .query(&[("query", query), ("page", page.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("JSearch returned {status}: {message}");
            return Err(JSearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = response.json().await?;
        debug!("JSearch returned {} postings for '{query}'", body.data.len());

        Ok(body
            .data
            .into_iter()
            .map(|posting| to_new_job(posting, engine))
            .collect())
    }
}

/// Classifies the title and picks the required skills: JSearch's own list
/// when present, otherwise whatever the engine finds in the description.
pub fn to_new_job(posting: JSearchPosting, engine: &SkillEngine) -> NewJob {
    let skills_required: Vec<String> = match posting.job_required_skills {
        Some(skills) if !skills.is_empty() => skills.iter().map(|s| s.to_lowercase()).collect(),
        _ => {
            let description = posting.job_description.as_deref().unwrap_or_default();
            let mut skills: Vec<String> =
                engine.normalize_and_extract(description).into_iter().collect();
            skills.sort();
            skills
        }
    };

    let location = match (posting.job_city, posting.job_country) {
        (Some(city), Some(country)) => Some(format!("{city}, {country}")),
        (Some(city), None) => Some(city),
        (None, country) => country,
    };

    NewJob {
        external_id: posting.job_id,
        role: Industry::classify(&posting.job_title).to_string(),
        experience_level: ExperienceLevel::classify(&posting.job_title).to_string(),
        job_title: posting.job_title,
        company: posting.employer_name,
        location,
        job_url: posting.job_apply_link,
        skills_required,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_deserializes() {
        let json = r#"{
            "status": "OK",
            "request_id": "abc",
            "data": [{
                "job_id": "j-1",
                "job_title": "Senior Data Analyst",
                "employer_name": "Acme",
                "job_city": "Austin",
                "job_country": "US",
                "job_apply_link": "https://acme.example/apply",
                "job_description": "SQL and Tableau daily.",
                "job_required_skills": null,
                "job_is_remote": false
            }]
        }"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.data.len(), 1);
        assert_eq!(parsed.data[0].job_id, "j-1");
        assert!(parsed.data[0].job_required_skills.is_none());
    }

    #[test]
    fn test_missing_data_is_empty() {
        let parsed: SearchResponse = serde_json::from_str(r#"{"status": "OK"}"#).unwrap();
        assert!(parsed.data.is_empty());
    }

    #[test]
    fn test_description_extraction_when_no_skill_list() {
        let posting = JSearchPosting {
            job_id: "j-1".to_string(),
            job_title: "Senior Data Analyst".to_string(),
            employer_name: Some("Acme".to_string()),
            job_city: Some("Austin".to_string()),
            job_country: Some("US".to_string()),
            job_description: Some("You will own SQL models and Tableau reports.".to_string()),
            ..Default::default()
        };
        let job = to_new_job(posting, &SkillEngine::default());
        assert_eq!(job.role, "Data & Analytics");
        assert_eq!(job.experience_level, "Senior");
        assert_eq!(job.location.as_deref(), Some("Austin, US"));
        assert_eq!(job.skills_required, vec!["sql".to_string(), "tableau".to_string()]);
    }

    #[test]
    fn test_provided_skill_list_is_lowercased() {
        let posting = JSearchPosting {
            job_id: "j-2".to_string(),
            job_title: "Software Engineer".to_string(),
            job_country: Some("DE".to_string()),
            job_required_skills: Some(vec!["Rust".to_string(), "Kubernetes".to_string()]),
            ..Default::default()
        };
        let job = to_new_job(posting, &SkillEngine::default());
        assert_eq!(job.skills_required, vec!["rust".to_string(), "kubernetes".to_string()]);
        assert_eq!(job.experience_level, "Mid");
        assert_eq!(job.location.as_deref(), Some("DE"));
    }
}
