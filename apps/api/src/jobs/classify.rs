//! Title-based bucketing of postings into seniority and industry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Seniority inferred from a job title. Drives the ranking penalty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Senior,
    Entry,
    #[default]
    Mid,
}

const SENIOR_MARKERS: &[&str] = &["senior", "lead", "principal"];
const ENTRY_MARKERS: &[&str] = &["junior", "intern", "entry"];

impl ExperienceLevel {
    pub fn classify(title: &str) -> Self {
        let title = title.to_lowercase();
        if SENIOR_MARKERS.iter().any(|m| title.contains(m)) {
            ExperienceLevel::Senior
        } else if ENTRY_MARKERS.iter().any(|m| title.contains(m)) {
            ExperienceLevel::Entry
        } else {
            ExperienceLevel::Mid
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::Entry => "Entry",
            ExperienceLevel::Mid => "Mid",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Industry bucket inferred from a job title. Stored as the posting's `role`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    #[serde(rename = "Data & Analytics")]
    DataAnalytics,
    #[serde(rename = "Software Engineering")]
    SoftwareEngineering,
    #[serde(rename = "Finance & FinTech")]
    Finance,
    Marketing,
    #[serde(rename = "Cloud & DevOps")]
    CloudDevOps,
    #[default]
    Other,
}

impl Industry {
    /// First matching keyword wins, in the order listed below.
    pub fn classify(title: &str) -> Self {
        let title = title.to_lowercase();
        if title.contains("data") {
            Industry::DataAnalytics
        } else if title.contains("software") {
            Industry::SoftwareEngineering
        } else if title.contains("finance") {
            Industry::Finance
        } else if title.contains("marketing") {
            Industry::Marketing
        } else if title.contains("cloud") || title.contains("devops") {
            Industry::CloudDevOps
        } else {
            Industry::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::DataAnalytics => "Data & Analytics",
            Industry::SoftwareEngineering => "Software Engineering",
            Industry::Finance => "Finance & FinTech",
            Industry::Marketing => "Marketing",
            Industry::CloudDevOps => "Cloud & DevOps",
            Industry::Other => "Other",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
