use crate::nlp::{ParsedSentence, Token};

/// One phrase per passive auxiliary: the head verb and all of its direct
/// children, in sentence order.
///
/// `The system shall be tested.` yields `system shall be tested .`.
pub(crate) fn passive_phrases(parsed: &ParsedSentence) -> Vec<String> {
    parsed
        .passive_auxiliaries()
        .into_iter()
        .filter_map(|auxiliary| {
            let head = parsed.token(auxiliary)?.head;
            let verb = parsed.token(head)?;
            let mut group: Vec<&Token> = parsed.children(head).collect();
            group.push(verb);
            group.sort_by_key(|token| token.index);
            Some(
                group
                    .iter()
                    .map(|token| token.text.as_str())
                    .collect::<Vec<&str>>()
                    .join(" "),
            )
        })
        .collect()
}
