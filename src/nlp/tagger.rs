//! Tokenization and contextual part-of-speech tagging.

use unicode_segmentation::UnicodeSegmentation;

use super::Pos;
use super::lexicon::{LexClass, Lexicon, VerbForm};

#[derive(Debug, Clone)]
pub(crate) struct TaggedToken {
    pub text: String,
    pub lower: String,
    pub offset: usize,
    pub class: LexClass,
    pub pos: Pos,
    pub form: Option<VerbForm>,
}

impl TaggedToken {
    fn is_nominal(&self) -> bool {
        matches!(self.pos, Pos::Noun | Pos::Propn | Pos::Pron)
    }

    fn is_auxiliary_class(&self) -> bool {
        matches!(
            self.class,
            LexClass::Modal | LexClass::Be | LexClass::Have | LexClass::Do
        )
    }
}

/// Splits on Unicode word boundaries and drops whitespace.
pub(crate) fn tokenize(text: &str, lexicon: &Lexicon) -> Vec<TaggedToken> {
    text.split_word_bound_indices()
        .filter(|(_, piece)| !piece.trim().is_empty())
        .map(|(offset, piece)| {
            let lower = piece.to_lowercase();
            let class = lexicon.classify(&lower);
            TaggedToken {
                text: piece.to_string(),
                lower,
                offset,
                class,
                pos: Pos::X,
                form: None,
            }
        })
        .collect()
}

pub(crate) fn is_sentence_terminator(text: &str) -> bool {
    matches!(text, "." | "!" | "?" | ";")
}

/// Assigns `pos` (and `form` for verbs) to every token in place.
pub(crate) fn tag(tokens: &mut [TaggedToken], lexicon: &Lexicon) {
    for index in 0..tokens.len() {
        let (pos, form) = decide(tokens, index, lexicon);
        tokens[index].pos = pos;
        tokens[index].form = form;
    }
    settle_auxiliaries(tokens, lexicon);
}

fn decide(tokens: &[TaggedToken], index: usize, lexicon: &Lexicon) -> (Pos, Option<VerbForm>) {
    let token = &tokens[index];
    let prev = previous_significant(tokens, index);
    let next = next_significant(tokens, index);

    match token.class {
        LexClass::Punct => (Pos::Punct, None),
        LexClass::Sym => (Pos::Sym, None),
        LexClass::Num => (Pos::Num, None),
        LexClass::Pron => (Pos::Pron, None),
        LexClass::Adp => (Pos::Adp, None),
        LexClass::Cconj => (Pos::Cconj, None),
        LexClass::Sconj => (Pos::Sconj, None),
        LexClass::Neg => (Pos::Part, None),
        LexClass::Adv => (Pos::Adv, None),
        LexClass::Modal => (Pos::Aux, None),
        LexClass::Be | LexClass::Have | LexClass::Do => {
            (Pos::Aux, lexicon.analyze_verb(&token.lower).map(|(_, form)| form))
        }
        LexClass::Det => {
            let determines = next
                .map(|next| {
                    matches!(
                        tokens[next].class,
                        LexClass::Det | LexClass::Adj | LexClass::Num | LexClass::Open
                    )
                })
                .unwrap_or(false);
            if determines {
                (Pos::Det, None)
            } else {
                (Pos::Pron, None)
            }
        }
        LexClass::That => decide_that(tokens, index, prev, next),
        LexClass::To => decide_to(tokens, next, lexicon),
        LexClass::Adj => {
            let verb = after_verbal_trigger(tokens, prev)
                .then(|| lexicon.analyze_verb(&token.lower))
                .flatten();
            match verb {
                Some((_, form)) => (Pos::Verb, Some(form)),
                None => (Pos::Adj, None),
            }
        }
        LexClass::Open => decide_open(tokens, index, prev, next, lexicon),
    }
}

fn decide_that(
    tokens: &[TaggedToken],
    index: usize,
    prev: Option<usize>,
    next: Option<usize>,
) -> (Pos, Option<VerbForm>) {
    let prev_pos = prev.map(|prev| tokens[prev].pos);
    let next_class = next.map(|next| tokens[next].class);

    let next_is_verbal = matches!(
        next_class,
        Some(LexClass::Modal | LexClass::Be | LexClass::Have | LexClass::Do)
    );
    if matches!(prev_pos, Some(Pos::Noun | Pos::Propn)) && next_is_verbal {
        return (Pos::Pron, None);
    }
    if matches!(prev_pos, Some(Pos::Verb | Pos::Aux | Pos::Adj)) {
        return (Pos::Sconj, None);
    }
    let adjacent = next == Some(index + 1);
    if adjacent && matches!(next_class, Some(LexClass::Open | LexClass::Adj)) {
        return (Pos::Det, None);
    }
    (Pos::Pron, None)
}

fn decide_to(
    tokens: &[TaggedToken],
    next: Option<usize>,
    lexicon: &Lexicon,
) -> (Pos, Option<VerbForm>) {
    let Some(next) = next else {
        return (Pos::Adp, None);
    };
    let candidate = &tokens[next];
    if matches!(
        candidate.class,
        LexClass::Be | LexClass::Have | LexClass::Do
    ) {
        return (Pos::Part, None);
    }
    if !matches!(candidate.class, LexClass::Open | LexClass::Adj) {
        return (Pos::Adp, None);
    }

    let known_base = lexicon.is_verb_stem(&candidate.lower);
    let takes_object = next_significant(tokens, next)
        .map(|after| matches!(tokens[after].class, LexClass::Det | LexClass::Pron))
        .unwrap_or(false);
    if known_base || (candidate.class == LexClass::Open && takes_object) {
        (Pos::Part, None)
    } else {
        (Pos::Adp, None)
    }
}

fn decide_open(
    tokens: &[TaggedToken],
    index: usize,
    prev: Option<usize>,
    next: Option<usize>,
    lexicon: &Lexicon,
) -> (Pos, Option<VerbForm>) {
    let token = &tokens[index];
    let analysis = lexicon.analyze_verb(&token.lower);

    if after_verbal_trigger(tokens, prev) {
        return (Pos::Verb, Some(VerbForm::Base));
    }

    if let Some(prev) = prev {
        let previous = &tokens[prev];
        match previous.class {
            LexClass::Be if previous.pos == Pos::Aux => {
                if lexicon.looks_like_participle(&token.lower) {
                    return (Pos::Verb, Some(VerbForm::Participle));
                }
                if lexicon.looks_like_gerund(&token.lower) {
                    return (Pos::Verb, Some(VerbForm::Gerund));
                }
            }
            LexClass::Have if previous.pos == Pos::Aux => {
                if lexicon.looks_like_participle(&token.lower) {
                    return (Pos::Verb, Some(VerbForm::Participle));
                }
            }
            LexClass::Cconj => {
                if let Some(form) = coordinated_verb_form(tokens, index, prev, lexicon) {
                    return (Pos::Verb, Some(form));
                }
            }
            _ => {}
        }

        let next_is_verbal = next
            .map(|next| tokens[next].is_auxiliary_class() || tokens[next].pos == Pos::Verb)
            .unwrap_or(false);
        if previous.is_nominal()
            && previous.pos != Pos::Pron
            && !next_is_verbal
            && opens_clause(tokens, prev, lexicon)
        {
            if let Some((_, form)) = analysis {
                if matches!(form, VerbForm::ThirdPerson | VerbForm::PastOrParticiple) {
                    return (Pos::Verb, Some(form));
                }
            }
        }
        if previous.pos == Pos::Pron && lexicon.is_subject_pronoun(&previous.lower) {
            if let Some((_, form)) = analysis {
                if !matches!(form, VerbForm::Gerund | VerbForm::Participle) {
                    return (Pos::Verb, Some(form));
                }
            }
        }
    }

    if starts_clause(tokens, prev) && is_imperative(tokens, index, next, lexicon) {
        return (Pos::Verb, Some(VerbForm::Base));
    }

    let capitalized = token.text.chars().next().is_some_and(char::is_uppercase);
    let acronym = token.text.chars().filter(|ch| ch.is_alphabetic()).count() > 1
        && token.text.chars().all(|ch| !ch.is_lowercase());
    if acronym || (capitalized && !starts_clause(tokens, prev)) {
        return (Pos::Propn, None);
    }
    (Pos::Noun, None)
}

/// Modal, `do`, or infinitival `to` directly governs the next verb.
fn after_verbal_trigger(tokens: &[TaggedToken], prev: Option<usize>) -> bool {
    prev.map(|prev| {
        let previous = &tokens[prev];
        matches!(previous.class, LexClass::Modal | LexClass::Do)
            || (previous.class == LexClass::To && previous.pos == Pos::Part)
    })
    .unwrap_or(false)
}

/// `detect and report`: the word after a conjunction mirrors an earlier verb.
fn coordinated_verb_form(
    tokens: &[TaggedToken],
    index: usize,
    conjunction: usize,
    lexicon: &Lexicon,
) -> Option<VerbForm> {
    let earlier_verb = tokens[..conjunction]
        .iter()
        .rev()
        .take_while(|token| !is_sentence_terminator(&token.text))
        .find(|token| token.pos == Pos::Verb)?;
    let earlier_form = earlier_verb.form?;

    match lexicon.analyze_verb(&tokens[index].lower) {
        Some((_, form)) if form.agrees_with(earlier_form) => Some(form),
        Some(_) => None,
        None => {
            let adjacent = previous_significant(tokens, conjunction)
                .map(|before| tokens[before].pos == Pos::Verb)
                .unwrap_or(false);
            let lowercase = tokens[index].text.chars().all(|ch| !ch.is_uppercase());
            (adjacent && lowercase).then_some(earlier_form)
        }
    }
}

/// The noun phrase ending at `last` is not the object of an earlier verb or preposition.
fn opens_clause(tokens: &[TaggedToken], last: usize, lexicon: &Lexicon) -> bool {
    let mut first = last;
    while first > 0
        && matches!(
            tokens[first - 1].pos,
            Pos::Det | Pos::Adj | Pos::Num | Pos::Noun | Pos::Propn
        )
    {
        first -= 1;
    }
    match first.checked_sub(1) {
        None => true,
        Some(before) => {
            let token = &tokens[before];
            matches!(token.pos, Pos::Punct | Pos::Cconj | Pos::Sconj)
                || (token.pos == Pos::Adp && lexicon.is_clause_adposition(&token.lower))
        }
    }
}

fn starts_clause(tokens: &[TaggedToken], prev: Option<usize>) -> bool {
    match prev {
        None => true,
        Some(prev) => matches!(tokens[prev].text.as_str(), "." | "!" | "?" | ";" | ":"),
    }
}

/// A bare known verb opening a clause that has no other verbal material.
///
/// When only content words follow (`Start button`, `Test coverage report`)
/// the clause reads as a noun compound unless a determiner, pronoun or
/// number later marks an object.
fn is_imperative(
    tokens: &[TaggedToken],
    index: usize,
    next: Option<usize>,
    lexicon: &Lexicon,
) -> bool {
    if !lexicon.is_verb_stem(&tokens[index].lower) {
        return false;
    }
    let Some(next) = next else {
        return false;
    };
    let rest: Vec<&TaggedToken> = tokens[index + 1..]
        .iter()
        .take_while(|token| !is_sentence_terminator(&token.text))
        .collect();
    if rest.iter().any(|token| token.is_auxiliary_class()) {
        return false;
    }
    match tokens[next].class {
        LexClass::Det | LexClass::Pron | LexClass::Num => true,
        LexClass::Adj | LexClass::Open => rest.iter().any(|token| {
            matches!(
                token.class,
                LexClass::Det | LexClass::Pron | LexClass::Num | LexClass::That
            )
        }),
        _ => false,
    }
}

/// `have`/`do` with no verb after them are main verbs; `be` stays AUX as a copula.
fn settle_auxiliaries(tokens: &mut [TaggedToken], lexicon: &Lexicon) {
    for index in 0..tokens.len() {
        if !matches!(tokens[index].class, LexClass::Have | LexClass::Do) {
            continue;
        }
        let governs_verb = next_significant(tokens, index)
            .map(|next| matches!(tokens[next].pos, Pos::Verb | Pos::Aux))
            .unwrap_or(false);
        if !governs_verb {
            tokens[index].pos = Pos::Verb;
            tokens[index].form = lexicon
                .analyze_verb(&tokens[index].lower)
                .map(|(_, form)| form)
                .or(Some(VerbForm::Base));
        }
    }
}

/// Previous token, skipping adverbs and negation.
pub(crate) fn previous_significant(tokens: &[TaggedToken], index: usize) -> Option<usize> {
    (0..index)
        .rev()
        .find(|candidate| !matches!(tokens[*candidate].class, LexClass::Adv | LexClass::Neg))
}

/// Next token, skipping adverbs and negation.
pub(crate) fn next_significant(tokens: &[TaggedToken], index: usize) -> Option<usize> {
    (index + 1..tokens.len())
        .find(|candidate| !matches!(tokens[*candidate].class, LexClass::Adv | LexClass::Neg))
}
