//! The `sortboard score` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use sortboard_core::parser::{apply_layout, parse_layout_str};
use sortboard_core::report::EvaluationReport;

pub async fn execute(
    catalog_path: PathBuf,
    layout_path: PathBuf,
    filter: Option<String>,
    output: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let catalog = super::load_catalog(&catalog_path).await?;

    let layout_json = std::fs::read_to_string(&layout_path)
        .with_context(|| format!("failed to read layout from {}", layout_path.display()))?;
    let layout = parse_layout_str(&layout_json)?;
    let board = apply_layout(catalog, &layout)?;

    let report = EvaluationReport::evaluate(&board);
    super::print_scores(&report.scores);

    if let Some(query) = &filter {
        let matches = board.filter_pending(query);
        println!("\nPending cards matching '{query}': {}", matches.len());
        for task in matches {
            println!("  {}: {}", task.id, task.label);
        }
    }

    if let Some(output) = &output {
        super::write_reports(&report, output, &format)?;
    }

    Ok(())
}
