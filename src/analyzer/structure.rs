use crate::nlp::{ParsedSentence, TARGET_CONJUNCTIONS};

/// A statement with no verb or auxiliary is a fragment.
pub(crate) fn is_incomplete(parsed: &ParsedSentence) -> bool {
    !parsed.has_verb()
}

/// Conjunction words when any bundle actions, otherwise the surplus root verbs.
pub(crate) fn singularity_markers(parsed: &ParsedSentence) -> Vec<String> {
    let mut conjunctions: Vec<String> = Vec::new();
    for token in parsed.coordinating_conjunctions(TARGET_CONJUNCTIONS) {
        let word = token.text.to_lowercase();
        if !conjunctions.contains(&word) {
            conjunctions.push(word);
        }
    }
    if !conjunctions.is_empty() {
        return conjunctions;
    }

    let roots = parsed.root_verbs();
    roots
        .iter()
        .skip(1)
        .map(|token| token.text.clone())
        .collect()
}
