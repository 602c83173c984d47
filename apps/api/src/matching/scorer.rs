//! Weighted overlap scoring between a resume's skills and one posting's
//! required skills.
//!
//! Algorithm:
//! 1. Deduplicate the posting's skills, keeping first-occurrence order
//! 2. Each skill contributes its weight to the total; matched skills also
//!    contribute to the matched weight
//! 3. score = floor(matched_weight × 100 / total_weight), or 0 with no skills
//!
//! Weight lookups compare strings exactly. No normalization happens here.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::vocabulary::SkillWeights;

/// Score plus the matched/missing partition of the posting's skills.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u32, // 0 – 100
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

pub fn score_match(
    weights: &SkillWeights,
    resume_skills: &HashSet<String>,
    job_skills: &[String],
) -> MatchResult {
    let mut seen: HashSet<&str> = HashSet::with_capacity(job_skills.len());
    let mut total_weight: u64 = 0;
    let mut matched_weight: u64 = 0;
    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for skill in job_skills {
        if !seen.insert(skill.as_str()) {
            continue;
        }

        let weight = u64::from(weights.weight(skill));
        total_weight += weight;

        if resume_skills.contains(skill.as_str()) {
            matched_weight += weight;
            matched.push(skill.clone());
        } else {
            missing.push(skill.clone());
        }
    }

    let score = if total_weight > 0 {
        // matched_weight <= total_weight, so this never exceeds 100
        (matched_weight * 100 / total_weight) as u32
    } else {
        0
    };

    MatchResult {
        score,
        matched,
        missing,
    }
}
