use std::collections::HashSet;

use crate::matching::extractor::extract_skills;
use crate::matching::normalize::normalize;
use crate::matching::scorer::{score_match, MatchResult};
use crate::matching::vocabulary::{SkillWeights, Vocabulary};

/// Skill extraction and scoring over an injected vocabulary and weight map.
///
/// Holds only immutable data, so one instance is built at startup and shared
/// across request tasks as `Arc<SkillEngine>`.
#[derive(Debug, Clone, Default)]
pub struct SkillEngine {
    vocabulary: Vocabulary,
    weights: SkillWeights,
}

impl SkillEngine {
    pub fn new(vocabulary: Vocabulary, weights: SkillWeights) -> Self {
        Self {
            vocabulary,
            weights,
        }
    }

    /// Normalizes raw document text and returns the vocabulary skills found in it.
    pub fn normalize_and_extract(&self, raw_text: &str) -> HashSet<String> {
        extract_skills(&self.vocabulary, &normalize(raw_text))
    }

    /// Scores one posting's required skills against a resume's skill set.
    pub fn score(&self, resume_skills: &HashSet<String>, job_skills: &[String]) -> MatchResult {
        score_match(&self.weights, resume_skills, job_skills)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn weights(&self) -> &SkillWeights {
        &self.weights
    }
}
