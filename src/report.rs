//! Document-level analysis reports.

use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::model::{
    AnalysisReport, AnalyzedRequirement, Finding, RequirementEntry, RulesSummary, WeakTermCount,
};
use crate::rules::{RuleConfiguration, RuleSourceStatus, RuleStore};
use crate::scoring::{self, ScoringPolicy};
use crate::util::now_utc_string;

pub const REPORT_VERSION: u32 = 1;
pub const NO_REQUIREMENTS_WARNING: &str = "no recognizable requirements found";

/// Everything about a run that is not per-requirement.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    pub source: String,
    pub source_sha256: String,
    pub rules_source: String,
    pub rules_status: RuleSourceStatus,
    pub rules: &'a RuleConfiguration,
    pub policy: ScoringPolicy,
}

impl<'a> ReportContext<'a> {
    pub fn from_store(
        source: impl Into<String>,
        source_sha256: impl Into<String>,
        store: &RuleStore,
        rules: &'a RuleConfiguration,
        policy: ScoringPolicy,
    ) -> Self {
        Self {
            source: source.into(),
            source_sha256: source_sha256.into(),
            rules_source: store.source_label(),
            rules_status: store.status(),
            rules,
            policy,
        }
    }
}

pub fn rules_summary(source: &str, status: &RuleSourceStatus, rules: &RuleConfiguration) -> RulesSummary {
    RulesSummary {
        source: source.to_string(),
        status: status.to_string(),
        name: rules.name().map(ToOwned::to_owned),
        enabled_checks: rules.enabled_checks(),
        ambiguity_word_count: rules.ambiguity_words().len(),
    }
}

/// Weak terms by the number of requirements using them, most frequent first.
pub fn weak_term_frequency(analyzed: &[AnalyzedRequirement]) -> Vec<WeakTermCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for item in analyzed {
        for term in &item.finding.ambiguous_terms {
            *counts.entry(term.as_str()).or_default() += 1;
        }
    }

    let mut terms: Vec<WeakTermCount> = counts
        .into_iter()
        .map(|(term, count)| WeakTermCount {
            term: term.to_string(),
            count,
        })
        .collect();
    terms.sort_by(|left, right| right.count.cmp(&left.count).then_with(|| left.term.cmp(&right.term)));
    terms
}

pub fn requirement_entry(item: &AnalyzedRequirement) -> RequirementEntry {
    RequirementEntry {
        id: item.requirement.id.clone(),
        text: item.requirement.text.clone(),
        status: item.status().to_string(),
        issues: item.finding.issue_summary(),
        finding: item.finding.clone(),
    }
}

pub fn build_report(context: ReportContext<'_>, analyzed: &[AnalyzedRequirement]) -> AnalysisReport {
    let findings: Vec<Finding> = analyzed.iter().map(|item| item.finding.clone()).collect();

    let mut warnings = Vec::new();
    if let RuleSourceStatus::Fallback(reason) = &context.rules_status {
        warnings.push(format!("rule configuration unavailable, no checks configured: {reason}"));
    }
    if analyzed.is_empty() {
        warnings.push(NO_REQUIREMENTS_WARNING.to_string());
    }

    AnalysisReport {
        report_version: REPORT_VERSION,
        generated_at: now_utc_string(),
        source: context.source,
        source_sha256: context.source_sha256,
        rules: rules_summary(&context.rules_source, &context.rules_status, context.rules),
        summary: scoring::summarize(&findings, context.policy, context.rules),
        weak_terms: weak_term_frequency(analyzed),
        requirements: analyzed.iter().map(requirement_entry).collect(),
        warnings,
    }
}

pub fn write_text_report<W: Write>(output: &mut W, report: &AnalysisReport) -> io::Result<()> {
    let summary = &report.summary;
    let rules = &report.rules;

    writeln!(output, "Source: {} (sha256 {})", report.source, short_hash(&report.source_sha256))?;
    writeln!(
        output,
        "Rules: {} [{}] name={} checks={} words={}",
        rules.source,
        rules.status,
        rules.name.as_deref().unwrap_or("-"),
        if rules.enabled_checks.is_empty() {
            "none".to_string()
        } else {
            rules.enabled_checks.join(",")
        },
        rules.ambiguity_word_count,
    )?;
    writeln!(
        output,
        "Clarity score: {}/100 ({}) flagged={}/{}",
        summary.score, summary.policy, summary.flagged_count, summary.total_requirements,
    )?;
    writeln!(
        output,
        "Issues: ambiguity={} passive_voice={} incompleteness={} singularity={}",
        summary.issue_counts.ambiguity,
        summary.issue_counts.passive_voice,
        summary.issue_counts.incompleteness,
        summary.issue_counts.singularity,
    )?;
    if !report.weak_terms.is_empty() {
        let terms: Vec<String> = report
            .weak_terms
            .iter()
            .map(|entry| format!("{}={}", entry.term, entry.count))
            .collect();
        writeln!(output, "Weak terms: {}", terms.join(", "))?;
    }

    for entry in &report.requirements {
        let issues = if entry.issues.is_empty() { "-" } else { &entry.issues };
        writeln!(output, "{}\t{}\t{}", entry.id, entry.status, issues)?;
        writeln!(output, "\t{}", entry.text)?;
    }

    for warning in &report.warnings {
        writeln!(output, "Warning: {warning}")?;
    }
    Ok(())
}

fn short_hash(hash: &str) -> &str {
    hash.get(..12).unwrap_or(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Requirement;

    fn analyzed(id: &str, text: &str, finding: Finding) -> AnalyzedRequirement {
        AnalyzedRequirement {
            requirement: Requirement::new(id, text).expect("non-empty requirement"),
            finding,
        }
    }

    fn weak(terms: &[&str]) -> Finding {
        Finding {
            ambiguous_terms: terms.iter().map(|term| term.to_string()).collect(),
            ..Finding::default()
        }
    }

    fn context(rules: &RuleConfiguration, status: RuleSourceStatus) -> ReportContext<'_> {
        ReportContext {
            source: "pump.txt".to_string(),
            source_sha256: "0123456789abcdef0123".to_string(),
            rules_source: "rules.json".to_string(),
            rules_status: status,
            rules,
            policy: ScoringPolicy::PercentClear,
        }
    }

    #[test]
    fn weak_terms_sort_by_count_then_term() {
        let items = vec![
            analyzed("R-001", "fast and robust", weak(&["fast", "robust"])),
            analyzed("R-002", "fast", weak(&["fast"])),
            analyzed("R-003", "low and best", weak(&["low", "best"])),
        ];
        let terms = weak_term_frequency(&items);
        let flat: Vec<(&str, usize)> = terms
            .iter()
            .map(|entry| (entry.term.as_str(), entry.count))
            .collect();
        assert_eq!(flat, vec![("fast", 2), ("best", 1), ("low", 1), ("robust", 1)]);
    }

    #[test]
    fn entries_carry_status_and_issue_summary() {
        let finding = Finding {
            ambiguous_terms: vec!["fast".to_string()],
            passive_phrases: vec!["shall be tested".to_string()],
            is_incomplete: true,
            singularity_markers: vec!["and".to_string()],
        };
        let entry = requirement_entry(&analyzed("SYS-9", "text", finding));
        assert_eq!(entry.status, "Flagged");
        assert_eq!(
            entry.issues,
            "Ambiguity: fast; Passive Voice: shall be tested; Incompleteness; Singularity: and"
        );

        let clear = requirement_entry(&analyzed("SYS-10", "text", Finding::default()));
        assert_eq!(clear.status, "Clear");
        assert!(clear.issues.is_empty());
    }

    #[test]
    fn empty_run_and_fallback_rules_produce_warnings() {
        let rules = RuleConfiguration::empty();
        let report = build_report(
            context(&rules, RuleSourceStatus::Fallback("missing".to_string())),
            &[],
        );
        assert_eq!(report.summary.score, 100);
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[0].contains("missing"));
        assert_eq!(report.warnings[1], NO_REQUIREMENTS_WARNING);
        assert_eq!(report.report_version, REPORT_VERSION);
    }

    #[test]
    fn text_report_lists_requirements() {
        let rules = RuleConfiguration::baseline();
        let items = vec![
            analyzed("SYS-001", "The pump shall start fast.", weak(&["fast"])),
            analyzed("SYS-002", "The valve shall close.", Finding::default()),
        ];
        let report = build_report(context(&rules, RuleSourceStatus::Loaded), &items);

        let mut buffer = Vec::new();
        write_text_report(&mut buffer, &report).expect("write to memory");
        let text = String::from_utf8(buffer).expect("utf8 output");

        assert!(text.contains("Source: pump.txt (sha256 0123456789ab)"));
        assert!(text.contains("Clarity score: 50/100 (percent_clear) flagged=1/2"));
        assert!(text.contains("Weak terms: fast=1"));
        assert!(text.contains("SYS-001\tFlagged\tAmbiguity: fast"));
        assert!(text.contains("SYS-002\tClear\t-"));
        assert!(!text.contains("Warning:"));
    }
}
