use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use reqcheck::ScoringPolicy;

#[derive(Parser, Debug)]
#[command(
    name = "reqcheck",
    version,
    about = "Requirement quality checks and document clarity scoring"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract requirements from a document and score it.
    Analyze(AnalyzeArgs),
    /// Check pasted requirement lines, one per line.
    Check(CheckArgs),
    /// Show the resolved rule configuration.
    Rules(RulesArgs),
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Rule file; the built-in baseline is used when omitted.
    #[arg(long)]
    pub rules: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = PolicyArg::PercentClear)]
    pub policy: PolicyArg,

    #[arg(long, default_value_t = 1)]
    pub jobs: usize,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long)]
    pub report_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    pub input: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Requirement lines; read from stdin when omitted.
    #[arg(long)]
    pub text: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct RulesArgs {
    #[arg(long)]
    pub rules: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum PolicyArg {
    #[value(alias = "percent_clear")]
    PercentClear,
    #[value(alias = "issue_weighted")]
    IssueWeighted,
}

impl From<PolicyArg> for ScoringPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::PercentClear => ScoringPolicy::PercentClear,
            PolicyArg::IssueWeighted => ScoringPolicy::IssueWeighted,
        }
    }
}
