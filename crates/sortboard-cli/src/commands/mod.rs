pub mod init;
pub mod replay;
pub mod score;
pub mod shuffle;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use sortboard_core::model::Catalog;
use sortboard_core::report::EvaluationReport;
use sortboard_core::scoring::BoardScores;
use sortboard_core::source::{CatalogSource, FileSource};
use sortboard_report::html::write_html_report;
use sortboard_report::markdown::write_markdown_report;

/// Fetch the catalog from disk; a load failure means no board at all.
pub async fn load_catalog(path: &Path) -> Result<Catalog> {
    let source = FileSource::new(path);
    let catalog = source.fetch().await.inspect_err(|e| {
        tracing::error!("catalog load failed, board stays empty: {e}");
    })?;
    tracing::info!("loaded {} tasks from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Print the per-phase accuracy/order table plus the global summary line.
pub fn print_scores(scores: &BoardScores) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Phase", "Placed", "Accuracy", "Order"]);
    for phase in &scores.phases {
        table.add_row(vec![
            Cell::new(phase.phase),
            Cell::new(format!("{}/{}", phase.placed, phase.expected)),
            Cell::new(format!(
                "{:.1}% ({})",
                phase.accuracy_pct, phase.accuracy_rating
            )),
            Cell::new(format!("{:.1}% ({})", phase.order_pct, phase.order_rating)),
        ]);
    }

    println!("{table}");
    println!(
        "Pending: {:.1}% | Total accuracy: {:.1}% ({})",
        scores.pending_pct, scores.accuracy_pct, scores.accuracy_rating
    );
}

/// Write the evaluation report in the requested formats.
pub fn write_reports(report: &EvaluationReport, output: &PathBuf, format: &str) -> Result<()> {
    std::fs::create_dir_all(output)
        .with_context(|| format!("failed to create {}", output.display()))?;
    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");

    let formats: Vec<&str> = if format == "all" {
        vec!["json", "markdown", "html"]
    } else {
        format.split(',').map(|s| s.trim()).collect()
    };

    for fmt in &formats {
        match *fmt {
            "json" => {
                let path = output.join(format!("report-{timestamp}.json"));
                report.save_json(&path)?;
                eprintln!("Report saved to: {}", path.display());
            }
            "markdown" => {
                let path = output.join(format!("report-{timestamp}.md"));
                write_markdown_report(report, &path)?;
                eprintln!("Markdown report: {}", path.display());
            }
            "html" => {
                let path = output.join(format!("report-{timestamp}.html"));
                write_html_report(report, &path)?;
                eprintln!("HTML report: {}", path.display());
            }
            _ => {
                eprintln!("Unknown format: {fmt}");
            }
        }
    }

    Ok(())
}
