use regex::Regex;
use tracing::warn;

/// Whole-word matcher for configured weak words and phrases.
///
/// Each phrase must be bounded by a non-word character or the text edge, so
/// `high` never matches inside `highway`. Words of a phrase may be separated
/// by any run of whitespace.
#[derive(Debug, Clone, Default)]
pub struct PhraseMatcher {
    patterns: Vec<(String, Regex)>,
}

impl PhraseMatcher {
    pub fn new<'a>(phrases: impl IntoIterator<Item = &'a str>) -> Self {
        let mut patterns: Vec<(String, Regex)> = Vec::new();
        for phrase in phrases {
            let phrase = phrase.trim().to_lowercase();
            if phrase.is_empty() || patterns.iter().any(|(known, _)| *known == phrase) {
                continue;
            }
            let Some(pattern) = phrase_pattern(&phrase) else {
                continue;
            };
            match Regex::new(&pattern) {
                Ok(regex) => patterns.push((phrase, regex)),
                Err(err) => warn!(phrase = %phrase, error = %err, "skipping weak phrase"),
            }
        }
        Self { patterns }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Matching phrases in configured order.
    pub fn find_in(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.patterns
            .iter()
            .filter(|(_, regex)| regex.is_match(&lowered))
            .map(|(phrase, _)| phrase.clone())
            .collect()
    }
}

fn phrase_pattern(phrase: &str) -> Option<String> {
    let words: Vec<String> = phrase.split_whitespace().map(regex::escape).collect();
    if words.is_empty() {
        return None;
    }
    Some(format!(r"(?:^|\W){}(?:\W|$)", words.join(r"\s+")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_boundaries_are_respected() {
        let matcher = PhraseMatcher::new(["high"]);
        assert!(matcher.find_in("The highway sign shall be lit.").is_empty());
        assert_eq!(matcher.find_in("Provide HIGH availability."), vec!["high"]);
        assert_eq!(matcher.find_in("high"), vec!["high"]);
    }

    #[test]
    fn phrases_match_contiguously() {
        let matcher = PhraseMatcher::new(["as soon as possible"]);
        assert_eq!(
            matcher.find_in("Respond as soon  as\tpossible."),
            vec!["as soon as possible"]
        );
        assert!(matcher.find_in("Respond as soon as it can.").is_empty());
        assert!(matcher.find_in("as possible as soon").is_empty());
    }

    #[test]
    fn punctuation_inside_phrases_is_literal() {
        let matcher = PhraseMatcher::new(["etc.", "and/or", "user-friendly"]);
        assert_eq!(
            matcher.find_in("Logs, alarms etc. and/or a user-friendly view"),
            vec!["etc.", "and/or", "user-friendly"]
        );
        assert!(matcher.find_in("etcetera andor").is_empty());
    }

    #[test]
    fn results_follow_configured_order_once_each() {
        let matcher = PhraseMatcher::new(["fast", "robust", "FAST", " "]);
        assert_eq!(matcher.len(), 2);
        assert_eq!(
            matcher.find_in("A robust, fast and fast link."),
            vec!["fast", "robust"]
        );
    }
}
