//! Per-requirement quality checks.
//!
//! Ambiguity is a lexical match against the configured weak words. Passive
//! voice, incompleteness and singularity read the dependency parse. Each
//! check is independent; a parse failure silences only the parse-based ones.

use std::cell::RefCell;
use std::panic;
use std::sync::Arc;
use std::thread;

use tracing::{debug, warn};

use crate::model::{AnalyzedRequirement, Finding, IssueType, Requirement};
use crate::nlp::{self, SentenceParser};
use crate::rules::RuleConfiguration;

mod ambiguity;
mod structure;
mod voice;

pub use ambiguity::PhraseMatcher;

const STRUCTURAL_CHECKS: [IssueType; 3] = [
    IssueType::PassiveVoice,
    IssueType::Incompleteness,
    IssueType::Singularity,
];

thread_local! {
    static LAST_MATCHER: RefCell<Option<(Vec<String>, Arc<PhraseMatcher>)>> =
        const { RefCell::new(None) };
}

/// Compiled matcher for `words`, reused while consecutive calls on this
/// thread ask for the same list.
fn matcher_for(words: &[String]) -> Arc<PhraseMatcher> {
    LAST_MATCHER.with(|cell| {
        let mut cached = cell.borrow_mut();
        if let Some((key, matcher)) = cached.as_ref() {
            if key.as_slice() == words {
                return Arc::clone(matcher);
            }
        }
        let matcher = Arc::new(PhraseMatcher::new(words.iter().map(String::as_str)));
        *cached = Some((words.to_vec(), Arc::clone(&matcher)));
        matcher
    })
}

pub struct Analyzer<'p> {
    rules: Arc<RuleConfiguration>,
    matcher: Arc<PhraseMatcher>,
    parser: &'p dyn SentenceParser,
}

impl Analyzer<'static> {
    /// Analyzer backed by the process-wide parser.
    pub fn new(rules: Arc<RuleConfiguration>) -> Self {
        Self::with_parser(rules, nlp::shared_parser())
    }
}

impl<'p> Analyzer<'p> {
    pub fn with_parser(rules: Arc<RuleConfiguration>, parser: &'p dyn SentenceParser) -> Self {
        let matcher = matcher_for(rules.ambiguity_words());
        Self {
            rules,
            matcher,
            parser,
        }
    }

    pub fn rules(&self) -> &RuleConfiguration {
        &self.rules
    }

    pub fn runs(&self, issue: IssueType) -> bool {
        runs(&self.rules, issue)
    }

    pub fn analyze(&self, text: &str) -> Finding {
        run_checks(&self.rules, &self.matcher, self.parser, text)
    }

    pub fn analyze_requirement(&self, requirement: &Requirement) -> AnalyzedRequirement {
        let finding = self.analyze(&requirement.text);
        debug!(
            id = %requirement.id,
            flagged = finding.is_flagged(),
            issues = %finding.issue_summary(),
            "analyzed requirement"
        );
        AnalyzedRequirement {
            requirement: requirement.clone(),
            finding,
        }
    }

    /// Analyzes a batch, spreading it over `jobs` scoped threads when above 1.
    /// Results keep input order.
    pub fn analyze_all(&self, requirements: &[Requirement], jobs: usize) -> Vec<AnalyzedRequirement> {
        let jobs = jobs.max(1).min(requirements.len().max(1));
        if jobs == 1 {
            return requirements
                .iter()
                .map(|requirement| self.analyze_requirement(requirement))
                .collect();
        }

        let chunk_size = requirements.len().div_ceil(jobs);
        thread::scope(|scope| {
            let handles: Vec<_> = requirements
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|requirement| self.analyze_requirement(requirement))
                            .collect::<Vec<AnalyzedRequirement>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
                .collect()
        })
    }
}

/// Analyzes one text under `rules` with the shared parser.
pub fn analyze_requirement(text: &str, rules: &RuleConfiguration) -> Finding {
    let matcher = matcher_for(rules.ambiguity_words());
    run_checks(rules, &matcher, nlp::shared_parser(), text)
}

/// Lexical checks need the rule switched on. Structural checks run unless
/// the configuration names them and turns them off.
fn runs(rules: &RuleConfiguration, issue: IssueType) -> bool {
    match issue {
        IssueType::Ambiguity => rules.is_enabled(issue.key()),
        _ => !rules.is_explicitly_disabled(issue.key()),
    }
}

fn run_checks(
    rules: &RuleConfiguration,
    matcher: &PhraseMatcher,
    parser: &dyn SentenceParser,
    text: &str,
) -> Finding {
    let mut finding = Finding::default();
    if runs(rules, IssueType::Ambiguity) {
        finding.ambiguous_terms = matcher.find_in(text);
    }

    if !STRUCTURAL_CHECKS.iter().any(|issue| runs(rules, *issue)) {
        return finding;
    }

    match parser.parse(text) {
        Ok(parsed) => {
            if runs(rules, IssueType::PassiveVoice) {
                finding.passive_phrases = voice::passive_phrases(&parsed);
            }
            if runs(rules, IssueType::Incompleteness) {
                finding.is_incomplete = structure::is_incomplete(&parsed);
            }
            if runs(rules, IssueType::Singularity) {
                finding.singularity_markers = structure::singularity_markers(&parsed);
            }
        }
        Err(err) => {
            warn!(error = %err, text = %preview(text), "skipping structural checks");
        }
    }

    finding
}

fn preview(text: &str) -> String {
    const LIMIT: usize = 60;
    if text.chars().count() <= LIMIT {
        return text.to_string();
    }
    let mut shortened: String = text.chars().take(LIMIT).collect();
    shortened.push_str("...");
    shortened
}
