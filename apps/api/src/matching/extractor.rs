use std::collections::HashSet;

use crate::matching::vocabulary::Vocabulary;

/// Returns every vocabulary phrase whose tokens all occur in `normalized_text`.
///
/// Token presence is plain substring search: tokens need not be adjacent,
/// ordered, or on word boundaries. "java" is found inside "javascript" and a
/// phrase like "power bi" is found when "power" and "bi" appear anywhere.
/// Callers are expected to pass text produced by [`normalize`].
///
/// [`normalize`]: crate::matching::normalize::normalize
pub fn extract_skills(vocabulary: &Vocabulary, normalized_text: &str) -> HashSet<String> {
    if normalized_text.is_empty() {
        return HashSet::new();
    }

    vocabulary
        .iter()
        .filter(|phrase| {
            phrase
                .split_whitespace()
                .all(|token| normalized_text.contains(token))
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::normalize::normalize;

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_detects_single_and_multi_word_phrases() {
        let vocab = Vocabulary::new(["python", "sql", "power bi", "tableau"]);
        let text = normalize("Skilled in Python, SQL & Power-BI!!");
        assert_eq!(
            extract_skills(&vocab, &text),
            set(&["python", "sql", "power bi"])
        );
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        let vocab = Vocabulary::default();
        assert!(extract_skills(&vocab, "").is_empty());
    }

    #[test]
    fn test_token_matches_inside_longer_words() {
        let vocab = Vocabulary::new(["java", "rust"]);
        let found = extract_skills(&vocab, "five years of javascript");
        assert_eq!(found, set(&["java"]));
    }

    #[test]
    fn test_phrase_tokens_need_not_be_adjacent_or_ordered() {
        let vocab = Vocabulary::new(["machine learning"]);
        let found = extract_skills(&vocab, "learning to fix every machine");
        assert_eq!(found, set(&["machine learning"]));
    }

    #[test]
    fn test_phrase_with_one_missing_token_is_absent() {
        let vocab = Vocabulary::new(["google analytics"]);
        assert!(extract_skills(&vocab, "google sheets power user").is_empty());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let vocab = Vocabulary::default();
        let text = normalize("Data analyst: SQL, Excel dashboards, Tableau, AWS, agile/scrum.");
        let first = extract_skills(&vocab, &text);
        let second = extract_skills(&vocab, &text);
        assert_eq!(first, second);
        assert!(first.contains("dashboards"));
        assert!(first.contains("dashboard"));
        assert!(first.contains("scrum"));
    }
}
