use std::io::Write;
use std::sync::Arc;

use reqcheck::model::IssueCounts;
use reqcheck::report::{ReportContext, build_report};
use reqcheck::scoring::{issue_weighted_score, percent_clear_score};
use reqcheck::{
    Analyzer, Finding, IssueType, RuleConfiguration, RuleStore, ScoringPolicy,
    extract_requirements, load_rule_configuration, parse_pasted_lines, score_document,
};
use tempfile::NamedTempFile;

const DOCUMENT: &str = "\
Pump controller requirements
SYS-001 The system shall be tested by the operator.
SYS-002 Low battery.
SYS-003 The system shall detect and report anomalies.
";

fn rule_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp rule file should be created");
    file.write_all(
        br#"{
            "name": "Scenario",
            "rules": {
                "ambiguity": { "enabled": true, "words": ["fast", "as soon as possible"], "penalty": 15 },
                "passive_voice": { "enabled": true, "penalty": 10 },
                "incompleteness": { "enabled": true, "penalty": 25 },
                "singularity": { "enabled": true, "penalty": 5 }
            }
        }"#,
    )
    .expect("temp rule file should be writable");
    file
}

fn expected_weighted(findings: &[Finding], rules: &RuleConfiguration) -> u8 {
    let counts = IssueCounts::from_findings(findings);
    let penalty: i64 = IssueType::ALL
        .iter()
        .map(|issue| counts.get(*issue) as i64 * rules.penalty(*issue))
        .sum();
    let average = penalty as f64 / findings.len() as f64;
    (100.0 - average).max(0.0).trunc() as u8
}

#[test]
fn scenario_document_is_fully_flagged() {
    let file = rule_file();
    let store = RuleStore::open(Some(file.path().to_path_buf()));
    let rules = store.snapshot();

    let requirements = extract_requirements(DOCUMENT);
    assert_eq!(requirements.len(), 3);

    let analyzed = Analyzer::new(Arc::clone(&rules)).analyze_all(&requirements, 2);
    let findings: Vec<Finding> = analyzed.iter().map(|item| item.finding.clone()).collect();

    let passive = &findings[0];
    assert_eq!(analyzed[0].requirement.id, "SYS-001");
    assert!(passive.passive_phrases.iter().any(|phrase| phrase.contains("be tested")));
    assert!(!passive.is_incomplete);
    assert!(passive.singularity_markers.is_empty());
    assert!(passive.ambiguous_terms.is_empty());

    let fragment = &findings[1];
    assert!(fragment.is_incomplete);
    assert!(fragment.ambiguous_terms.is_empty());
    assert!(fragment.passive_phrases.is_empty());
    assert!(fragment.singularity_markers.is_empty());

    let bundled = &findings[2];
    assert_eq!(bundled.singularity_markers, vec!["and"]);
    assert!(bundled.passive_phrases.is_empty());
    assert!(!bundled.is_incomplete);

    assert_eq!(score_document(&findings, ScoringPolicy::PercentClear, &rules), 0);
    let weighted = score_document(&findings, ScoringPolicy::IssueWeighted, &rules);
    assert_eq!(weighted, expected_weighted(&findings, &rules));
    assert_eq!(weighted, 86);
}

#[test]
fn scenario_report_under_baseline_rules() {
    let store = RuleStore::open(None);
    let rules = store.snapshot();
    let requirements = extract_requirements(DOCUMENT);
    let analyzed = Analyzer::new(Arc::clone(&rules)).analyze_all(&requirements, 1);

    let context = ReportContext::from_store(
        "scenario.txt",
        reqcheck::util::sha256_text(DOCUMENT),
        &store,
        &rules,
        ScoringPolicy::IssueWeighted,
    );
    let report = build_report(context, &analyzed);

    assert_eq!(report.rules.status, "builtin");
    assert_eq!(report.summary.flagged_count, 3);
    assert_eq!(report.summary.issue_counts.ambiguity, 1);
    // (passive 10 + incompleteness 25 + ambiguity 15 + singularity 0) / 3
    assert_eq!(report.summary.score, 83);
    assert_eq!(report.weak_terms.len(), 1);
    assert_eq!(report.weak_terms[0].term, "low");
    assert_eq!(report.requirements[1].issues, "Ambiguity: low; Incompleteness");
    assert!(report.warnings.is_empty());
}

#[test]
fn missing_rule_file_fails_open() {
    let rules = load_rule_configuration("/nonexistent/path.json");
    assert!(!rules.is_enabled("ambiguity"));
    assert!(rules.ambiguity_words().is_empty());

    let store = RuleStore::open(Some("/nonexistent/path.json".into()));
    let analyzer = Analyzer::new(store.snapshot());
    let analyzed = analyzer.analyze_all(&parse_pasted_lines("Low battery indicator\nThe pump shall start fast."), 1);
    assert!(analyzed[0].finding.is_incomplete);
    assert!(analyzed[1].finding.ambiguous_terms.is_empty());
    assert_eq!(analyzed[1].requirement.id, "R-002");
}

#[test]
fn empty_document_scores_vacuously() {
    let rules = RuleConfiguration::baseline();
    let requirements = extract_requirements("No requirement markers here.");
    assert!(requirements.is_empty());
    assert_eq!(percent_clear_score(&[]), 100);
    assert_eq!(issue_weighted_score(&[], &rules), 100);
}
