use anyhow::Result;
use reqcheck::extract_requirements;
use reqcheck::util::{read_text_file, sha256_text};
use tracing::info;

use crate::cli::AnalyzeArgs;

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let text = read_text_file(&args.input)?;
    let requirements = extract_requirements(&text);

    info!(
        path = %args.input.display(),
        lines = text.lines().count(),
        requirements = requirements.len(),
        "extracted requirements"
    );

    super::analyze_and_emit(
        args.input.display().to_string(),
        sha256_text(&text),
        &requirements,
        &args.output,
    )
}
