//! Markdown report generator.

use std::path::Path;

use anyhow::{Context, Result};

use sortboard_core::report::EvaluationReport;

/// Render an evaluation report as Markdown.
pub fn render_markdown(report: &EvaluationReport) -> String {
    let mut md = String::new();

    md.push_str("# Board evaluation\n\n");
    md.push_str(&format!(
        "{} tasks | evaluated {}\n\n",
        report.catalog.task_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    md.push_str(&format!(
        "**Summary:** pending {:.1}% | total accuracy {:.1}% ({})\n\n",
        report.scores.pending_pct, report.scores.accuracy_pct, report.scores.accuracy_rating
    ));

    md.push_str("| Phase | Placed | Accuracy | Order |\n");
    md.push_str("|-------|--------|----------|-------|\n");
    for phase in &report.scores.phases {
        md.push_str(&format!(
            "| {} | {}/{} | {:.1}% ({}) | {:.1}% ({}) |\n",
            phase.phase,
            phase.placed,
            phase.expected,
            phase.accuracy_pct,
            phase.accuracy_rating,
            phase.order_pct,
            phase.order_rating,
        ));
    }

    md
}

/// Write the Markdown report to a file.
pub fn write_markdown_report(report: &EvaluationReport, path: &Path) -> Result<()> {
    std::fs::write(path, render_markdown(report))
        .with_context(|| format!("failed to write markdown report to {}", path.display()))?;
    Ok(())
}
