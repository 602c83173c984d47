//! Skill vocabulary and importance weights.
//!
//! Both are immutable once built. `Vocabulary::default()` and
//! `SkillWeights::default()` carry the built-in tables; tests and alternate
//! deployments construct their own and inject them into `SkillEngine`.

use std::collections::{BTreeSet, HashMap};

use thiserror::Error;

use crate::matching::normalize::normalize;

/// Weight applied to any skill missing from the weight map.
pub const DEFAULT_WEIGHT: u32 = 1;

const BUILTIN_SKILLS: &[&str] = &[
    // Data & Analytics
    "python",
    "sql",
    "excel",
    "power bi",
    "tableau",
    "statistics",
    "machine learning",
    "data analysis",
    "pandas",
    "numpy",
    "dashboard",
    "dashboards",
    // Software / Engineering
    "java",
    "javascript",
    "git",
    "rest api",
    "flask",
    "django",
    "react",
    "node",
    // Cloud / DevOps
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "devops",
    "ci cd",
    // Marketing
    "seo",
    "google analytics",
    "campaign analysis",
    "marketing analytics",
    // Finance
    "financial analysis",
    "risk analysis",
    // Product / Management
    "stakeholder management",
    "roadmapping",
    "mentoring",
    "agile",
    "scrum",
];

const BUILTIN_WEIGHTS: &[(&str, u32)] = &[
    // High impact
    ("python", 3),
    ("sql", 3),
    ("machine learning", 3),
    ("statistics", 3),
    // Medium impact
    ("power bi", 2),
    ("tableau", 2),
    ("financial analysis", 2),
    ("marketing analytics", 2),
    ("risk analysis", 2),
    ("aws", 2),
    ("azure", 2),
    // Foundational
    ("excel", 1),
    ("numpy", 1),
    ("pandas", 1),
    ("git", 1),
    ("react", 1),
    ("docker", 1),
    ("stakeholder management", 1),
    ("mentoring", 1),
];

#[derive(Debug, Error, PartialEq)]
pub enum WeightError {
    #[error("Skill '{skill}' has weight 0; weights must be at least 1")]
    ZeroWeight { skill: String },
}

/// The set of recognized skill phrases, stored normalized and deduplicated.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    phrases: BTreeSet<String>,
}

impl Vocabulary {
    /// Builds a vocabulary from arbitrary phrases. Each phrase is normalized;
    /// phrases that normalize to nothing are dropped since an empty token list
    /// would be present in every document.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|p| normalize(p.as_ref()))
            .filter(|p| !p.is_empty())
            .collect();
        Self { phrases }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.phrases.contains(phrase)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(BUILTIN_SKILLS.iter().copied())
    }
}

/// Importance multipliers keyed by exact skill phrase.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillWeights {
    weights: HashMap<String, u32>,
}

impl SkillWeights {
    /// Builds a weight map. Keys are used verbatim: lookups at scoring time
    /// are exact string comparisons.
    pub fn new<I, S>(pairs: I) -> Result<Self, WeightError>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut weights = HashMap::new();
        for (skill, weight) in pairs {
            let skill = skill.into();
            if weight == 0 {
                return Err(WeightError::ZeroWeight { skill });
            }
            weights.insert(skill, weight);
        }
        Ok(Self { weights })
    }

    /// Weight of `skill`, or [`DEFAULT_WEIGHT`] when unlisted.
    pub fn weight(&self, skill: &str) -> u32 {
        self.weights.get(skill).copied().unwrap_or(DEFAULT_WEIGHT)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl Default for SkillWeights {
    fn default() -> Self {
        let weights = BUILTIN_WEIGHTS
            .iter()
            .map(|(skill, weight)| (skill.to_string(), *weight))
            .collect();
        Self { weights }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_vocabulary_contains_multi_word_phrases() {
        let vocab = Vocabulary::default();
        assert!(vocab.contains("power bi"));
        assert!(vocab.contains("ci cd"));
        assert!(vocab.contains("stakeholder management"));
        assert_eq!(vocab.len(), BUILTIN_SKILLS.len());
    }

    #[test]
    fn test_vocabulary_normalizes_and_dedups() {
        let vocab = Vocabulary::new(["Power-BI", "power bi", "  SQL ", "sql"]);
        assert_eq!(vocab.len(), 2);
        assert!(vocab.contains("power bi"));
        assert!(vocab.contains("sql"));
    }

    #[test]
    fn test_vocabulary_drops_phrases_without_tokens() {
        let vocab = Vocabulary::new(["", "!!", "rust"]);
        assert_eq!(vocab.iter().collect::<Vec<_>>(), vec!["rust"]);
    }

    #[test]
    fn test_builtin_weights_are_at_least_one() {
        let weights = SkillWeights::default();
        for (skill, _) in BUILTIN_WEIGHTS {
            assert!(weights.weight(skill) >= 1, "{skill} has zero weight");
        }
        assert_eq!(weights.weight("python"), 3);
        assert_eq!(weights.weight("power bi"), 2);
        assert_eq!(weights.weight("excel"), 1);
    }

    #[test]
    fn test_unlisted_skill_defaults_to_one() {
        let weights = SkillWeights::default();
        assert_eq!(weights.weight("kubernetes"), DEFAULT_WEIGHT);
        assert_eq!(weights.weight("not a skill"), 1);
    }

    #[test]
    fn test_weight_lookup_is_exact() {
        let weights = SkillWeights::default();
        assert_eq!(weights.weight("Python"), 1);
        assert_eq!(weights.weight("python "), 1);
    }

    #[test]
    fn test_zero_weight_is_rejected() {
        let err = SkillWeights::new([("python", 3), ("sql", 0)]).unwrap_err();
        assert_eq!(
            err,
            WeightError::ZeroWeight {
                skill: "sql".to_string()
            }
        );
    }
}
