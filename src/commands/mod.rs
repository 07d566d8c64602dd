pub mod analyze;
pub mod check;
pub mod rules;

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use reqcheck::model::Requirement;
use reqcheck::report::{ReportContext, build_report, write_text_report};
use reqcheck::util::write_json_pretty;
use reqcheck::{Analyzer, RuleStore, ScoringPolicy};
use tracing::{info, warn};

use crate::cli::OutputArgs;

/// Analyzes `requirements`, writes the optional JSON report, prints the result.
pub(crate) fn analyze_and_emit(
    source: String,
    source_sha256: String,
    requirements: &[Requirement],
    args: &OutputArgs,
) -> Result<()> {
    if args.jobs == 0 {
        bail!("--jobs must be at least 1");
    }

    let store = RuleStore::open(args.rules.clone());
    let rules = store.snapshot();
    let policy = ScoringPolicy::from(args.policy);

    info!(
        source = %source,
        requirements = requirements.len(),
        rules = %store.source_label(),
        rules_status = %store.status(),
        policy = %policy,
        jobs = args.jobs,
        "analysis started"
    );

    let analyzer = Analyzer::new(Arc::clone(&rules));
    let analyzed = analyzer.analyze_all(requirements, args.jobs);
    let context = ReportContext::from_store(source, source_sha256, &store, &rules, policy);
    let report = build_report(context, &analyzed);

    info!(
        score = report.summary.score,
        flagged = report.summary.flagged_count,
        total = report.summary.total_requirements,
        "analysis finished"
    );
    for warning in &report.warnings {
        warn!(warning = %warning, "analysis warning");
    }

    if let Some(path) = &args.report_path {
        write_json_pretty(path, &report)?;
        info!(path = %path.display(), "wrote analysis report");
    }

    let mut output = io::BufWriter::new(io::stdout().lock());
    if args.json {
        serde_json::to_writer_pretty(&mut output, &report)
            .context("failed to serialize analysis json output")?;
        writeln!(output)?;
    } else {
        write_text_report(&mut output, &report).context("failed to write analysis output")?;
    }
    output.flush()?;
    Ok(())
}
