use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::model::IssueType;

/// Rule file shipped with the crate, relative to its root; same content as the baseline.
pub const DEFAULT_RULES_PATH: &str = "data/default_rules.json";
pub const BASELINE_RULES_NAME: &str = "INCOSE baseline";

/// Weak words and phrases flagged by the built-in baseline.
pub const BASELINE_AMBIGUITY_WORDS: &[&str] = &[
    "should",
    "may",
    "could",
    "possibly",
    "as appropriate",
    "user-friendly",
    "robust",
    "efficient",
    "effective",
    "etc.",
    "and/or",
    "minimize",
    "maximize",
    "support",
    "seamless",
    "easy to use",
    "state-of-the-art",
    "best",
    "handle",
    "approximately",
    "as required",
    "fast",
    "strong",
    "high resolution",
    "high",
    "low",
    "long",
];

const BASELINE_PENALTIES: &[(IssueType, i64)] = &[
    (IssueType::Ambiguity, 15),
    (IssueType::PassiveVoice, 10),
    (IssueType::Incompleteness, 25),
    (IssueType::Singularity, 0),
];

#[derive(Debug, Error)]
pub enum RuleLoadError {
    #[error("rule file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read rule file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse rule file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("rule file {} does not contain a JSON object", path.display())]
    NotAnObject { path: PathBuf },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CheckRule {
    pub enabled: bool,
    pub penalty: i64,
}

/// Immutable rule set consulted by the analyzer and the issue-weighted score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleConfiguration {
    name: Option<String>,
    checks: BTreeMap<String, CheckRule>,
    ambiguity_words: Vec<String>,
}

impl RuleConfiguration {
    /// No checks enabled, no words. The fallback for unusable rule sources.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rules used when the caller supplies no configuration at all.
    pub fn baseline() -> Self {
        let checks = BASELINE_PENALTIES
            .iter()
            .map(|(issue, penalty)| {
                (
                    issue.key().to_string(),
                    CheckRule {
                        enabled: true,
                        penalty: *penalty,
                    },
                )
            })
            .collect();

        Self {
            name: Some(BASELINE_RULES_NAME.to_string()),
            checks,
            ambiguity_words: normalize_words(BASELINE_AMBIGUITY_WORDS.iter().copied()),
        }
    }

    /// Builds a configuration from a parsed rule document.
    ///
    /// Every field is optional: a missing or mistyped value resolves to its
    /// default (`enabled: false`, `penalty: 0`, no words) instead of failing.
    pub fn from_value(value: &Value) -> Self {
        let name = value
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToOwned::to_owned);

        let Some(rules) = value.get("rules").and_then(Value::as_object) else {
            return Self {
                name,
                ..Self::default()
            };
        };

        let mut checks = BTreeMap::new();
        for (check, entry) in rules {
            let key = check.trim().to_ascii_lowercase();
            if key.is_empty() {
                continue;
            }
            let rule = CheckRule {
                enabled: entry.get("enabled").and_then(Value::as_bool).unwrap_or(false),
                penalty: entry.get("penalty").and_then(parse_penalty).unwrap_or(0),
            };
            checks.insert(key, rule);
        }

        let ambiguity_words = rules
            .get(IssueType::Ambiguity.key())
            .and_then(|entry| entry.get("words"))
            .and_then(Value::as_array)
            .map(|words| normalize_words(words.iter().filter_map(Value::as_str)))
            .unwrap_or_default();

        Self {
            name,
            checks,
            ambiguity_words,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_enabled(&self, check: &str) -> bool {
        self.checks
            .get(check)
            .map(|rule| rule.enabled)
            .unwrap_or(false)
    }

    /// True only when the configuration names the check and turns it off.
    pub fn is_explicitly_disabled(&self, check: &str) -> bool {
        self.checks.get(check).is_some_and(|rule| !rule.enabled)
    }

    pub fn ambiguity_words(&self) -> &[String] {
        &self.ambiguity_words
    }

    pub fn penalty(&self, issue: IssueType) -> i64 {
        self.penalty_for(issue.key())
    }

    pub fn penalty_for(&self, check: &str) -> i64 {
        self.checks.get(check).map(|rule| rule.penalty).unwrap_or(0)
    }

    pub fn enabled_checks(&self) -> Vec<String> {
        self.checks
            .iter()
            .filter(|(_, rule)| rule.enabled)
            .map(|(check, _)| check.clone())
            .collect()
    }

    pub fn checks(&self) -> &BTreeMap<String, CheckRule> {
        &self.checks
    }
}

/// Largest magnitude a configured penalty keeps; anything beyond already
/// drives every weighted score to a bound.
pub const PENALTY_LIMIT: i64 = 1_000_000;

fn parse_penalty(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|penalty| penalty.is_finite())
                .map(|penalty| penalty.trunc() as i64)
        })
        .map(|penalty| penalty.clamp(-PENALTY_LIMIT, PENALTY_LIMIT))
}

fn normalize_words<'a>(words: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut normalized = Vec::<String>::new();
    for word in words {
        let word = word
            .split_whitespace()
            .collect::<Vec<&str>>()
            .join(" ")
            .to_lowercase();
        if !word.is_empty() && !normalized.contains(&word) {
            normalized.push(word);
        }
    }
    normalized
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum RuleSourceStatus {
    Builtin,
    Loaded,
    Fallback(String),
}

impl fmt::Display for RuleSourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "builtin"),
            Self::Loaded => write!(f, "loaded"),
            Self::Fallback(reason) => write!(f, "fallback ({reason})"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedRules {
    pub configuration: Arc<RuleConfiguration>,
    pub status: RuleSourceStatus,
}

impl LoadedRules {
    pub fn builtin() -> Self {
        Self {
            configuration: Arc::new(RuleConfiguration::baseline()),
            status: RuleSourceStatus::Builtin,
        }
    }

    /// Loads `path`, degrading to the empty configuration on any failure.
    pub fn from_path(path: &Path) -> Self {
        match try_load(path) {
            Ok(configuration) => {
                info!(
                    path = %path.display(),
                    name = %configuration.name().unwrap_or_default(),
                    enabled = configuration.enabled_checks().len(),
                    words = configuration.ambiguity_words().len(),
                    "loaded rule configuration"
                );
                Self {
                    configuration: Arc::new(configuration),
                    status: RuleSourceStatus::Loaded,
                }
            }
            Err(err) => {
                warn!(error = %err, "using empty rule configuration");
                Self {
                    configuration: Arc::new(RuleConfiguration::empty()),
                    status: RuleSourceStatus::Fallback(err.to_string()),
                }
            }
        }
    }
}

/// Strict loader: reports why a rule file could not be used.
pub fn try_load(path: &Path) -> Result<RuleConfiguration, RuleLoadError> {
    let raw = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => RuleLoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => RuleLoadError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let value: Value = serde_json::from_slice(&raw).map_err(|source| RuleLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if !value.is_object() {
        return Err(RuleLoadError::NotAnObject {
            path: path.to_path_buf(),
        });
    }

    Ok(RuleConfiguration::from_value(&value))
}

/// Loads a rule file; never fails.
pub fn load_rule_configuration(path: impl AsRef<Path>) -> RuleConfiguration {
    let loaded = LoadedRules::from_path(path.as_ref());
    Arc::unwrap_or_clone(loaded.configuration)
}

/// Holds the active configuration and swaps it whole on reload.
#[derive(Debug)]
pub struct RuleStore {
    source: Option<PathBuf>,
    current: RwLock<LoadedRules>,
}

impl RuleStore {
    /// `None` selects the built-in baseline.
    pub fn open(source: Option<PathBuf>) -> Self {
        let loaded = resolve(source.as_deref());
        Self {
            source,
            current: RwLock::new(loaded),
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn source_label(&self) -> String {
        self.source
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| BASELINE_RULES_NAME.to_string())
    }

    /// The configuration an analysis run should hold on to.
    pub fn snapshot(&self) -> Arc<RuleConfiguration> {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&current.configuration)
    }

    pub fn status(&self) -> RuleSourceStatus {
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        current.status.clone()
    }

    /// Re-reads the source and replaces the active configuration.
    pub fn reload(&self) -> RuleSourceStatus {
        let loaded = resolve(self.source.as_deref());
        let status = loaded.status.clone();
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = loaded;
        status
    }
}

fn resolve(source: Option<&Path>) -> LoadedRules {
    match source {
        Some(path) => LoadedRules::from_path(path),
        None => LoadedRules::builtin(),
    }
}
