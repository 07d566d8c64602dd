use std::io::{self, Read};

use anyhow::{Context, Result};
use reqcheck::parse_pasted_lines;
use reqcheck::util::sha256_text;
use tracing::debug;

use crate::cli::CheckArgs;

pub fn run(args: CheckArgs) -> Result<()> {
    let (source, raw) = match args.text {
        Some(text) => ("inline".to_string(), text),
        None => {
            let mut raw = String::new();
            io::stdin()
                .lock()
                .read_to_string(&mut raw)
                .context("failed to read requirements from stdin")?;
            ("stdin".to_string(), raw)
        }
    };

    let requirements = parse_pasted_lines(&raw);
    debug!(source = %source, requirements = requirements.len(), "parsed pasted lines");

    super::analyze_and_emit(source, sha256_text(&raw), &requirements, &args.output)
}
