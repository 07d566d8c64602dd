use std::collections::BTreeMap;
use std::io::{self, Write};

use anyhow::{Context, Result};
use reqcheck::RuleStore;
use reqcheck::rules::CheckRule;
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::RulesArgs;

#[derive(Debug, Serialize)]
struct RulesView<'a> {
    source: String,
    status: String,
    name: Option<&'a str>,
    checks: &'a BTreeMap<String, CheckRule>,
    ambiguity_words: &'a [String],
}

pub fn run(args: RulesArgs) -> Result<()> {
    let store = RuleStore::open(args.rules);
    let rules = store.snapshot();
    let status = store.status();

    info!(
        source = %store.source_label(),
        status = %status,
        checks = rules.checks().len(),
        words = rules.ambiguity_words().len(),
        "resolved rule configuration"
    );
    if rules.checks().is_empty() {
        warn!(source = %store.source_label(), "no checks configured");
    }

    let view = RulesView {
        source: store.source_label(),
        status: status.to_string(),
        name: rules.name(),
        checks: rules.checks(),
        ambiguity_words: rules.ambiguity_words(),
    };

    let mut output = io::BufWriter::new(io::stdout().lock());
    if args.json {
        serde_json::to_writer_pretty(&mut output, &view)
            .context("failed to serialize rules json output")?;
        writeln!(output)?;
    } else {
        write_text(&mut output, &view)?;
    }
    output.flush()?;
    Ok(())
}

fn write_text<W: Write>(output: &mut W, view: &RulesView<'_>) -> Result<()> {
    writeln!(output, "Source: {} [{}]", view.source, view.status)?;
    writeln!(output, "Name: {}", view.name.unwrap_or("-"))?;
    writeln!(output, "Checks: {}", view.checks.len())?;
    for (check, rule) in view.checks {
        let state = if rule.enabled { "on" } else { "off" };
        writeln!(output, "\t{check}\t{state}\tpenalty={}", rule.penalty)?;
    }
    writeln!(output, "Ambiguity words: {}", view.ambiguity_words.len())?;
    for word in view.ambiguity_words {
        writeln!(output, "\t{word}")?;
    }
    Ok(())
}
