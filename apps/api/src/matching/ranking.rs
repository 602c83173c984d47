//! Ranks stored postings against one resume's skills.
//!
//! The engine score is raw; the seniority penalty and the top-N cut are
//! applied here as caller policy.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::jobs::classify::ExperienceLevel;
use crate::matching::engine::SkillEngine;
use crate::models::job::JobRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingPolicy {
    /// Points subtracted from Senior postings, floored at 0.
    pub senior_penalty: u32,
    pub top_n: usize,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            senior_penalty: 10,
            top_n: 5,
        }
    }
}

/// One ranked posting returned to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub match_score: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub job_url: Option<String>,
}

pub fn rank_postings(
    engine: &SkillEngine,
    resume_skills: &HashSet<String>,
    jobs: &[JobRow],
    policy: RankingPolicy,
) -> Vec<JobMatch> {
    let senior = ExperienceLevel::Senior.as_str();

    let mut results: Vec<JobMatch> = jobs
        .iter()
        .filter_map(|job| {
            let job_skills: Vec<String> = job
                .skills_required
                .iter()
                .map(|s| s.to_lowercase())
                .collect();
            if job_skills.is_empty() {
                return None;
            }

            let result = engine.score(resume_skills, &job_skills);
            let match_score = if job.experience_level == senior {
                result.score.saturating_sub(policy.senior_penalty)
            } else {
                result.score
            };
            debug!(job_id = %job.id, raw = result.score, match_score, "Scored posting");

            Some(JobMatch {
                job_title: job.job_title.clone(),
                company: job.company.clone(),
                location: job.location.clone(),
                match_score,
                matched_skills: result.matched,
                missing_skills: result.missing,
                job_url: job.job_url.clone(),
            })
        })
        .collect();

    // stable: equal scores keep store order
    results.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    results.truncate(policy.top_n);
    results
}
