use super::lexicon::lexicon;
use super::tagger::{tag, tokenize};
use super::*;

fn token<'a>(parsed: &'a ParsedSentence, text: &str) -> &'a Token {
    parsed
        .tokens()
        .iter()
        .find(|token| token.text == text)
        .unwrap_or_else(|| panic!("no token {text:?} in {:?}", parsed.tokens()))
}

fn pos_tags(text: &str) -> Vec<(String, Pos)> {
    let mut tokens = tokenize(text, lexicon());
    tag(&mut tokens, lexicon());
    tokens.into_iter().map(|token| (token.text, token.pos)).collect()
}

#[test]
fn tokenize_keeps_words_whole_and_drops_whitespace() {
    let tokens = tokenize("The highway  sign, 5 m/s.", lexicon());
    let texts: Vec<&str> = tokens.iter().map(|token| token.text.as_str()).collect();
    assert_eq!(texts, vec!["The", "highway", "sign", ",", "5", "m", "/", "s", "."]);
    assert_eq!(tokens[1].offset, 4);
}

#[test]
fn tagger_marks_modal_chain_and_participle() {
    let tags = pos_tags("The system shall be tested by the operator.");
    let expected = [
        ("The", Pos::Det),
        ("system", Pos::Noun),
        ("shall", Pos::Aux),
        ("be", Pos::Aux),
        ("tested", Pos::Verb),
        ("by", Pos::Adp),
        ("the", Pos::Det),
        ("operator", Pos::Noun),
        (".", Pos::Punct),
    ];
    let actual: Vec<(&str, Pos)> = tags.iter().map(|(text, pos)| (text.as_str(), *pos)).collect();
    assert_eq!(actual, expected);
}

#[test]
fn tagger_reads_verb_after_conjunction() {
    let tags = pos_tags("The system shall detect and report anomalies.");
    assert!(tags.contains(&("report".to_string(), Pos::Verb)));
    assert!(tags.contains(&("anomalies".to_string(), Pos::Noun)));
    assert!(tags.contains(&("and".to_string(), Pos::Cconj)));
}

#[test]
fn passive_auxiliary_attaches_to_participle() {
    let parsed = parse("The system shall be tested by the operator.").expect("parse");

    let be = token(&parsed, "be");
    let tested = token(&parsed, "tested");
    assert_eq!(be.dep, DepLabel::AuxPass);
    assert_eq!(be.head, tested.index);
    assert_eq!(token(&parsed, "shall").dep, DepLabel::Aux);
    assert_eq!(tested.dep, DepLabel::Root);
    assert_eq!(tested.head, tested.index);
    assert_eq!(token(&parsed, "system").dep, DepLabel::NsubjPass);
    assert_eq!(token(&parsed, "by").dep, DepLabel::Agent);
    assert_eq!(token(&parsed, "operator").dep, DepLabel::Pobj);
    assert_eq!(parsed.passive_auxiliaries(), vec![be.index]);
}

#[test]
fn active_sentence_has_no_passive_auxiliary() {
    let parsed = parse("The operator shall test the system.").expect("parse");
    assert!(parsed.passive_auxiliaries().is_empty());
    assert_eq!(token(&parsed, "operator").dep, DepLabel::Nsubj);
    assert_eq!(token(&parsed, "system").dep, DepLabel::Dobj);
}

#[test]
fn progressive_be_is_plain_auxiliary() {
    let parsed = parse("The pump is running.").expect("parse");
    assert_eq!(token(&parsed, "is").dep, DepLabel::Aux);
    assert!(parsed.passive_auxiliaries().is_empty());
}

#[test]
fn noun_phrase_fragment_has_no_verb() {
    let parsed = parse("Low battery indicator").expect("parse");
    assert!(!parsed.has_verb());
    let root = token(&parsed, "indicator");
    assert_eq!(root.dep, DepLabel::Root);
    assert_eq!(token(&parsed, "battery").dep, DepLabel::Compound);
}

#[test]
fn verb_stem_heading_a_noun_compound_stays_nominal() {
    for fragment in ["Test coverage report", "Start button", "Display brightness control"] {
        let tags = pos_tags(fragment);
        assert!(
            tags.iter().all(|(_, pos)| *pos == Pos::Noun),
            "{fragment}: {tags:?}"
        );
        assert!(!parse(fragment).expect("parse").has_verb(), "{fragment}");
    }
}

#[test]
fn imperative_with_marked_object_is_a_verb() {
    let tags = pos_tags("Start the pump.");
    assert_eq!(tags[0], ("Start".to_string(), Pos::Verb));

    let tags = pos_tags("Display pressure readings in the cockpit.");
    assert_eq!(tags[0], ("Display".to_string(), Pos::Verb));
    assert_eq!(token(&parse("Start the pump.").expect("parse"), "Start").dep, DepLabel::Root);
}

#[test]
fn coordinated_verbs_share_one_root() {
    let parsed = parse("The system shall detect and report anomalies.").expect("parse");

    let detect = token(&parsed, "detect");
    let and = token(&parsed, "and");
    let report = token(&parsed, "report");
    assert_eq!(and.dep, DepLabel::Cc);
    assert_eq!(and.head, detect.index);
    assert_eq!(report.dep, DepLabel::Conj);
    assert_eq!(report.head, detect.index);
    assert_eq!(parsed.root_verbs().len(), 1);

    let markers = parsed.coordinating_conjunctions(TARGET_CONJUNCTIONS);
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].text, "and");
}

#[test]
fn nominal_coordination_is_marked_cc() {
    let parsed = parse("The system shall log errors or warnings.").expect("parse");
    let or = token(&parsed, "or");
    assert_eq!(or.dep, DepLabel::Cc);
    assert_eq!(token(&parsed, "warnings").dep, DepLabel::Conj);
    assert_eq!(parsed.root_verbs().len(), 1);
}

#[test]
fn separate_sentences_each_get_a_root() {
    let parsed = parse("The pump shall start. The valve shall close.").expect("parse");
    let roots: Vec<&str> = parsed
        .root_verbs()
        .iter()
        .map(|token| token.text.as_str())
        .collect();
    assert_eq!(roots, vec!["start", "close"]);
}

#[test]
fn comma_spliced_clause_with_subject_is_a_root() {
    let parsed = parse("The pump shall start, the valve shall close.").expect("parse");
    assert_eq!(parsed.root_verbs().len(), 2);
}

#[test]
fn abbreviation_period_does_not_split() {
    let parsed = parse("The pump shall start e.g. within limits.").expect("parse");
    assert_eq!(parsed.root_verbs().len(), 1);
}

#[test]
fn leading_condition_attaches_to_main_clause() {
    let parsed = parse("If the pump fails, the valve shall close.").expect("parse");

    let fails = token(&parsed, "fails");
    let close = token(&parsed, "close");
    assert_eq!(close.dep, DepLabel::Root);
    assert_eq!(fails.dep, DepLabel::Advcl);
    assert_eq!(fails.head, close.index);
    assert_eq!(token(&parsed, "If").dep, DepLabel::Mark);
    assert_eq!(parsed.root_verbs().len(), 1);
}

#[test]
fn reduced_relative_is_not_a_second_root() {
    let parsed = parse("Data received from the sensor shall be stored.").expect("parse");

    let received = token(&parsed, "received");
    assert_eq!(received.dep, DepLabel::Acl);
    assert_eq!(token(&parsed, "Data").dep, DepLabel::NsubjPass);
    let roots: Vec<&str> = parsed
        .root_verbs()
        .iter()
        .map(|token| token.text.as_str())
        .collect();
    assert_eq!(roots, vec!["stored"]);
}

#[test]
fn children_lists_dependents_in_order() {
    let parsed = parse("The system shall be tested.").expect("parse");
    let tested = token(&parsed, "tested");
    let children: Vec<&str> = parsed
        .children(tested.index)
        .map(|token| token.text.as_str())
        .collect();
    assert_eq!(children, vec!["system", "shall", "be", "."]);
}

#[test]
fn every_head_stays_inside_the_sentence() {
    let parsed =
        parse("When the door opens, the light shall turn on and the fan shall start.").expect("parse");
    let count = parsed.tokens().len();
    for token in parsed.tokens() {
        assert!(token.head < count, "{token:?}");
        if token.dep == DepLabel::Root {
            assert_eq!(token.head, token.index);
        }
    }
}

#[test]
fn parse_rejects_degenerate_input() {
    assert_eq!(parse(""), Err(ParseError::Empty));
    assert_eq!(parse("   \n"), Err(ParseError::Empty));
    assert_eq!(parse("... !!"), Err(ParseError::NoWords));

    let parser = ShallowParser::with_max_tokens(3);
    assert_eq!(
        parser.parse("The pump shall start."),
        Err(ParseError::TooLong {
            tokens: 5,
            limit: 3
        })
    );
}

#[test]
fn labels_render_in_clear_style() {
    assert_eq!(DepLabel::AuxPass.to_string(), "auxpass");
    assert_eq!(DepLabel::Root.to_string(), "ROOT");
    assert_eq!(Pos::Cconj.to_string(), "CCONJ");
}
