use proptest::prelude::*;
use reqcheck::scoring::percent_clear_score;
use reqcheck::{Finding, RuleConfiguration, ScoringPolicy, analyze_requirement, score_document};

const VOCABULARY: &[&str] = &[
    "the", "system", "shall", "be", "tested", "by", "operator", "and", "or", "pump", "start",
    "valve", "close", "fast", "low", "battery", "if", "it", "fails", ",", ".", ";", "not",
    "which", "that", "to", "report", "data", "received", "from", "sensor", "is", "running",
    "SYS-001", "as", "soon", "possible", "highway",
];

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..24).prop_map(|words| words.join(" "))
}

fn flagged() -> Finding {
    Finding {
        is_incomplete: true,
        ..Finding::default()
    }
}

proptest! {
    #[test]
    fn analysis_is_idempotent(text in sentence()) {
        let rules = RuleConfiguration::baseline();
        let first = analyze_requirement(&text, &rules);
        let second = analyze_requirement(&text, &rules);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn weak_words_never_match_inside_longer_words(prefix in "[a-z]{1,6}", suffix in "[a-z]{1,6}") {
        let rules = RuleConfiguration::baseline();
        let text = format!("The {prefix}high{suffix} value");
        let finding = analyze_requirement(&text, &rules);
        prop_assert!(!finding.ambiguous_terms.iter().any(|term| term == "high"));
    }

    #[test]
    fn flagging_a_clear_requirement_never_raises_percent_clear(
        states in prop::collection::vec(any::<bool>(), 1..40),
        pick in any::<prop::sample::Index>(),
    ) {
        let findings: Vec<Finding> = states
            .iter()
            .map(|is_flagged| if *is_flagged { flagged() } else { Finding::default() })
            .collect();
        let before = percent_clear_score(&findings);

        let mut worse = findings.clone();
        let index = pick.index(worse.len());
        worse[index] = flagged();
        prop_assert!(percent_clear_score(&worse) <= before);
    }

    #[test]
    fn scores_stay_in_range(
        states in prop::collection::vec(any::<bool>(), 0..20),
        penalty in -500i64..500,
    ) {
        let rules = RuleConfiguration::from_value(&serde_json::json!({
            "rules": { "incompleteness": { "enabled": true, "penalty": penalty } }
        }));
        let findings: Vec<Finding> = states
            .iter()
            .map(|is_flagged| if *is_flagged { flagged() } else { Finding::default() })
            .collect();
        for policy in [ScoringPolicy::PercentClear, ScoringPolicy::IssueWeighted] {
            prop_assert!(score_document(&findings, policy, &rules) <= 100);
        }
    }
}
