use serde::{Deserialize, Serialize};

/// One requirement statement taken from a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub id: String,
    pub text: String,
}

impl Requirement {
    /// Builds a requirement, refusing empty text.
    pub fn new(id: impl Into<String>, text: impl AsRef<str>) -> Option<Self> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            return None;
        }

        Some(Self {
            id: id.into().trim().to_string(),
            text: text.to_string(),
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    Ambiguity,
    PassiveVoice,
    Incompleteness,
    Singularity,
}

impl IssueType {
    pub const ALL: [IssueType; 4] = [
        Self::Ambiguity,
        Self::PassiveVoice,
        Self::Incompleteness,
        Self::Singularity,
    ];

    /// Key used for this issue in rule files.
    pub fn key(self) -> &'static str {
        match self {
            Self::Ambiguity => "ambiguity",
            Self::PassiveVoice => "passive_voice",
            Self::Incompleteness => "incompleteness",
            Self::Singularity => "singularity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ambiguity => "Ambiguity",
            Self::PassiveVoice => "Passive Voice",
            Self::Incompleteness => "Incompleteness",
            Self::Singularity => "Singularity",
        }
    }
}

/// Result of analyzing one requirement.
///
/// Whether a requirement is flagged is always derived from these fields; see
/// [`Finding::is_flagged`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub ambiguous_terms: Vec<String>,
    pub passive_phrases: Vec<String>,
    pub is_incomplete: bool,
    pub singularity_markers: Vec<String>,
}

impl Finding {
    pub fn has_issue(&self, issue: IssueType) -> bool {
        match issue {
            IssueType::Ambiguity => !self.ambiguous_terms.is_empty(),
            IssueType::PassiveVoice => !self.passive_phrases.is_empty(),
            IssueType::Incompleteness => self.is_incomplete,
            IssueType::Singularity => !self.singularity_markers.is_empty(),
        }
    }

    pub fn is_flagged(&self) -> bool {
        IssueType::ALL.iter().any(|issue| self.has_issue(*issue))
    }

    pub fn issue_types(&self) -> Vec<IssueType> {
        IssueType::ALL
            .into_iter()
            .filter(|issue| self.has_issue(*issue))
            .collect()
    }

    /// Human-readable list of issues, e.g. `Ambiguity: fast; Incompleteness`.
    pub fn issue_summary(&self) -> String {
        self.issue_types()
            .into_iter()
            .map(|issue| {
                let details = match issue {
                    IssueType::Ambiguity => self.ambiguous_terms.join(", "),
                    IssueType::PassiveVoice => self.passive_phrases.join(", "),
                    IssueType::Incompleteness => String::new(),
                    IssueType::Singularity => self.singularity_markers.join(", "),
                };
                if details.is_empty() {
                    issue.label().to_string()
                } else {
                    format!("{}: {details}", issue.label())
                }
            })
            .collect::<Vec<String>>()
            .join("; ")
    }
}

/// Number of requirements affected by each issue type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCounts {
    pub ambiguity: usize,
    pub passive_voice: usize,
    pub incompleteness: usize,
    pub singularity: usize,
}

impl IssueCounts {
    pub fn from_findings<'a>(findings: impl IntoIterator<Item = &'a Finding>) -> Self {
        let mut counts = Self::default();
        for finding in findings {
            counts.record(finding);
        }
        counts
    }

    pub fn record(&mut self, finding: &Finding) {
        for issue in finding.issue_types() {
            *self.slot_mut(issue) += 1;
        }
    }

    pub fn get(&self, issue: IssueType) -> usize {
        match issue {
            IssueType::Ambiguity => self.ambiguity,
            IssueType::PassiveVoice => self.passive_voice,
            IssueType::Incompleteness => self.incompleteness,
            IssueType::Singularity => self.singularity,
        }
    }

    fn slot_mut(&mut self, issue: IssueType) -> &mut usize {
        match issue {
            IssueType::Ambiguity => &mut self.ambiguity,
            IssueType::PassiveVoice => &mut self.passive_voice,
            IssueType::Incompleteness => &mut self.incompleteness,
            IssueType::Singularity => &mut self.singularity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentScore {
    pub policy: String,
    pub total_requirements: usize,
    pub flagged_count: usize,
    pub issue_counts: IssueCounts,
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedRequirement {
    pub requirement: Requirement,
    pub finding: Finding,
}

impl AnalyzedRequirement {
    pub fn status(&self) -> &'static str {
        if self.finding.is_flagged() {
            "Flagged"
        } else {
            "Clear"
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RequirementEntry {
    pub id: String,
    pub text: String,
    pub status: String,
    pub issues: String,
    pub finding: Finding,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeakTermCount {
    pub term: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RulesSummary {
    pub source: String,
    pub status: String,
    pub name: Option<String>,
    pub enabled_checks: Vec<String>,
    pub ambiguity_word_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub report_version: u32,
    pub generated_at: String,
    pub source: String,
    pub source_sha256: String,
    pub rules: RulesSummary,
    pub summary: DocumentScore,
    pub weak_terms: Vec<WeakTermCount>,
    pub requirements: Vec<RequirementEntry>,
    pub warnings: Vec<String>,
}
