use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::models::job::JobRow;

const NOT_AVAILABLE: &str = "N/A";
const UNKNOWN_LOCATION: &str = "Unknown";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    pub total_jobs: usize,
    pub top_role: String,
    pub top_skill: String,
    pub roles_distribution: BTreeMap<String, usize>,
    pub experience_distribution: BTreeMap<String, usize>,
    pub location_distribution: BTreeMap<String, usize>,
    pub jobs: Vec<JobRow>,
}

/// Counts occurrences while remembering first-seen order, so ties for the
/// top entry resolve to whichever key appeared first.
#[derive(Default)]
struct Tally {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl Tally {
    fn add(&mut self, key: &str) {
        match self.counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.to_string(), 1);
                self.order.push(key.to_string());
            }
        }
    }

    fn top(&self) -> String {
        let mut best: Option<(&str, usize)> = None;
        for key in &self.order {
            let count = self.counts[key];
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((key.as_str(), count));
            }
        }
        best.map(|(k, _)| k.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    fn into_distribution(self) -> BTreeMap<String, usize> {
        self.counts.into_iter().collect()
    }
}

/// Aggregates role, seniority, location and skill counts over all postings.
pub fn build_dashboard(jobs: Vec<JobRow>) -> DashboardReport {
    let mut roles = Tally::default();
    let mut experience = Tally::default();
    let mut locations = Tally::default();
    let mut skills = Tally::default();

    for job in &jobs {
        roles.add(&job.role);
        experience.add(&job.experience_level);
        locations.add(job.location.as_deref().unwrap_or(UNKNOWN_LOCATION));
        for skill in &job.skills_required {
            skills.add(&skill.to_lowercase());
        }
    }

    DashboardReport {
        total_jobs: jobs.len(),
        top_role: roles.top(),
        top_skill: skills.top(),
        roles_distribution: roles.into_distribution(),
        experience_distribution: experience.into_distribution(),
        location_distribution: locations.into_distribution(),
        jobs,
    }
}
