//! Shallow linguistic analysis of requirement sentences.
//!
//! The parser emits Universal-Dependencies style part-of-speech tags and
//! ClearNLP style dependency labels (`ROOT`, `auxpass`, `cc`, ...). The
//! quality checks only rely on those labels, so any [`SentenceParser`] that
//! emits the same tagset can replace [`ShallowParser`].

use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;

mod lexicon;
mod parser;
mod tagger;
#[cfg(test)]
mod tests;

pub use parser::{DEFAULT_MAX_TOKENS, ShallowParser};

/// Connectives that bundle several actions into one statement.
pub const TARGET_CONJUNCTIONS: &[&str] = &["and", "or"];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Pos {
    Noun,
    Propn,
    Verb,
    Aux,
    Adj,
    Adv,
    Adp,
    Det,
    Pron,
    Cconj,
    Sconj,
    Part,
    Num,
    Punct,
    Sym,
    X,
}

impl Pos {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Noun => "NOUN",
            Self::Propn => "PROPN",
            Self::Verb => "VERB",
            Self::Aux => "AUX",
            Self::Adj => "ADJ",
            Self::Adv => "ADV",
            Self::Adp => "ADP",
            Self::Det => "DET",
            Self::Pron => "PRON",
            Self::Cconj => "CCONJ",
            Self::Sconj => "SCONJ",
            Self::Part => "PART",
            Self::Num => "NUM",
            Self::Punct => "PUNCT",
            Self::Sym => "SYM",
            Self::X => "X",
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DepLabel {
    Root,
    Nsubj,
    NsubjPass,
    Aux,
    AuxPass,
    Neg,
    Dobj,
    Attr,
    Acomp,
    Prep,
    Pobj,
    Agent,
    Det,
    Amod,
    Compound,
    Nummod,
    Advmod,
    Cc,
    Conj,
    Mark,
    Advcl,
    Ccomp,
    Relcl,
    Acl,
    Xcomp,
    Punct,
    Dep,
}

impl DepLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Root => "ROOT",
            Self::Nsubj => "nsubj",
            Self::NsubjPass => "nsubjpass",
            Self::Aux => "aux",
            Self::AuxPass => "auxpass",
            Self::Neg => "neg",
            Self::Dobj => "dobj",
            Self::Attr => "attr",
            Self::Acomp => "acomp",
            Self::Prep => "prep",
            Self::Pobj => "pobj",
            Self::Agent => "agent",
            Self::Det => "det",
            Self::Amod => "amod",
            Self::Compound => "compound",
            Self::Nummod => "nummod",
            Self::Advmod => "advmod",
            Self::Cc => "cc",
            Self::Conj => "conj",
            Self::Mark => "mark",
            Self::Advcl => "advcl",
            Self::Ccomp => "ccomp",
            Self::Relcl => "relcl",
            Self::Acl => "acl",
            Self::Xcomp => "xcomp",
            Self::Punct => "punct",
            Self::Dep => "dep",
        }
    }
}

impl fmt::Display for DepLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub index: usize,
    pub text: String,
    pub pos: Pos,
    pub dep: DepLabel,
    /// Index of the syntactic head; a `ROOT` token is its own head.
    pub head: usize,
    /// Byte offset of the token in the parsed text.
    pub offset: usize,
}

impl Token {
    pub fn is_verbal(&self) -> bool {
        matches!(self.pos, Pos::Verb | Pos::Aux)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("sentence is empty")]
    Empty,

    #[error("sentence has no word tokens")]
    NoWords,

    #[error("sentence has {tokens} tokens, above the limit of {limit}")]
    TooLong { tokens: usize, limit: usize },
}

pub trait SentenceParser: Send + Sync {
    fn parse(&self, text: &str) -> Result<ParsedSentence, ParseError>;
}

/// Tagged and attached tokens of one requirement text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedSentence {
    tokens: Vec<Token>,
}

impl ParsedSentence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Dependents of `index`, in sentence order.
    pub fn children(&self, index: usize) -> impl Iterator<Item = &Token> + '_ {
        self.tokens
            .iter()
            .filter(move |token| token.head == index && token.index != index)
    }

    /// Any VERB or AUX token.
    pub fn has_verb(&self) -> bool {
        self.tokens.iter().any(Token::is_verbal)
    }

    pub fn passive_auxiliaries(&self) -> Vec<usize> {
        self.tokens
            .iter()
            .filter(|token| token.dep == DepLabel::AuxPass)
            .map(|token| token.index)
            .collect()
    }

    pub fn root_verbs(&self) -> Vec<&Token> {
        self.tokens
            .iter()
            .filter(|token| token.dep == DepLabel::Root && token.pos == Pos::Verb)
            .collect()
    }

    /// `cc` tokens whose surface form is one of `targets`, ignoring case.
    pub fn coordinating_conjunctions(&self, targets: &[&str]) -> Vec<&Token> {
        self.tokens
            .iter()
            .filter(|token| token.dep == DepLabel::Cc)
            .filter(|token| {
                targets
                    .iter()
                    .any(|target| token.text.eq_ignore_ascii_case(target))
            })
            .collect()
    }
}

static SHARED_PARSER: Lazy<ShallowParser> = Lazy::new(ShallowParser::default);

/// Process-wide parser, built on first use.
pub fn shared_parser() -> &'static ShallowParser {
    &SHARED_PARSER
}

pub fn parse(text: &str) -> Result<ParsedSentence, ParseError> {
    shared_parser().parse(text)
}
