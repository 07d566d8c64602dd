//! Requirement quality analysis: weak wording, passive voice, fragments and
//! bundled actions, rolled up into a document clarity score.

pub mod analyzer;
pub mod extract;
pub mod model;
pub mod nlp;
pub mod report;
pub mod rules;
pub mod scoring;
pub mod util;

pub use analyzer::{Analyzer, analyze_requirement};
pub use extract::{extract_requirements, parse_pasted_lines};
pub use model::{Finding, IssueType, Requirement};
pub use rules::{RuleConfiguration, RuleStore, load_rule_configuration};
pub use scoring::{ScoringError, ScoringPolicy, score_document};
