//! Document clarity scores.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::model::{DocumentScore, Finding, IssueCounts, IssueType};
use crate::rules::RuleConfiguration;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("unknown scoring policy `{0}` (expected percent_clear or issue_weighted)")]
    UnknownPolicy(String),
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// Share of requirements with no finding at all.
    #[default]
    PercentClear,
    /// 100 minus the average configured penalty per requirement.
    IssueWeighted,
}

impl ScoringPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PercentClear => "percent_clear",
            Self::IssueWeighted => "issue_weighted",
        }
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringPolicy {
    type Err = ScoringError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "percent_clear" => Ok(Self::PercentClear),
            "issue_weighted" => Ok(Self::IssueWeighted),
            _ => Err(ScoringError::UnknownPolicy(value.to_string())),
        }
    }
}

pub fn score_document(findings: &[Finding], policy: ScoringPolicy, rules: &RuleConfiguration) -> u8 {
    match policy {
        ScoringPolicy::PercentClear => percent_clear_score(findings),
        ScoringPolicy::IssueWeighted => issue_weighted_score(findings, rules),
    }
}

/// Scores with a policy given by name; unknown names are an error.
pub fn score_document_named(
    findings: &[Finding],
    policy: &str,
    rules: &RuleConfiguration,
) -> Result<u8, ScoringError> {
    Ok(score_document(findings, policy.parse()?, rules))
}

pub fn percent_clear_score(findings: &[Finding]) -> u8 {
    if findings.is_empty() {
        return 100;
    }
    let total = findings.len();
    let clear = findings.iter().filter(|finding| !finding.is_flagged()).count();
    let score = (100.0 * clear as f64 / total as f64).round();
    score.clamp(0.0, 100.0) as u8
}

/// Each issue type counts once per affected requirement, so one requirement
/// can contribute several penalties.
pub fn issue_weighted_score(findings: &[Finding], rules: &RuleConfiguration) -> u8 {
    if findings.is_empty() {
        return 100;
    }
    let counts = IssueCounts::from_findings(findings);
    let total_penalty = IssueType::ALL.iter().fold(0i64, |total, issue| {
        let count = i64::try_from(counts.get(*issue)).unwrap_or(i64::MAX);
        total.saturating_add(count.saturating_mul(rules.penalty(*issue)))
    });
    let average = total_penalty as f64 / findings.len() as f64;
    (100.0 - average).clamp(0.0, 100.0).trunc() as u8
}

pub fn summarize(findings: &[Finding], policy: ScoringPolicy, rules: &RuleConfiguration) -> DocumentScore {
    DocumentScore {
        policy: policy.to_string(),
        total_requirements: findings.len(),
        flagged_count: findings.iter().filter(|finding| finding.is_flagged()).count(),
        issue_counts: IssueCounts::from_findings(findings),
        score: score_document(findings, policy, rules),
    }
}
