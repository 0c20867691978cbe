//! HTML report generator.
//!
//! Produces a self-contained HTML file with all CSS inlined. Percentages
//! carry low/medium/high color classes, matching the on-board stat colors.

use std::path::Path;

use anyhow::{Context, Result};

use sortboard_core::report::EvaluationReport;
use sortboard_core::scoring::Rating;

const CSS: &str = "\
body { font-family: -apple-system, 'Segoe UI', sans-serif; margin: 2rem auto; max-width: 760px; color: #172b4d; }
h1 { font-size: 1.4rem; }
.meta { color: #5e6c84; }
table { border-collapse: collapse; width: 100%; margin-top: 1rem; }
th, td { border-bottom: 1px solid #dfe1e6; padding: 6px 10px; text-align: left; }
.summary { background: #f4f5f7; padding: 12px 16px; border-radius: 5px; }
.low { color: #de350b; font-weight: bold; }
.medium { color: #ff8b00; font-weight: bold; }
.high { color: #00875a; font-weight: bold; }
";

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn pct_cell(pct: f64, rating: Rating) -> String {
    format!("<span class=\"{rating}\">{pct:.1}%</span>")
}

/// Generate a standalone HTML page from an evaluation report.
pub fn generate_html(report: &EvaluationReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<title>sortboard evaluation</title>\n");
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str("<h1>sortboard evaluation</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">{} tasks | {}</p>\n",
        report.catalog.task_count,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    // Global summary bar
    html.push_str(&format!(
        "<p class=\"summary\">Pending: <strong>{:.1}%</strong> | Total accuracy: {}</p>\n",
        report.scores.pending_pct,
        pct_cell(report.scores.accuracy_pct, report.scores.accuracy_rating),
    ));

    // Per-phase breakdown
    html.push_str("<table>\n");
    html.push_str("<thead><tr><th>Phase</th><th>Placed</th><th>Accuracy</th><th>Order</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for phase in &report.scores.phases {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}/{}</td><td>{}</td><td>{}</td></tr>\n",
            html_escape(&phase.phase.to_string()),
            phase.placed,
            phase.expected,
            pct_cell(phase.accuracy_pct, phase.accuracy_rating),
            pct_cell(phase.order_pct, phase.order_rating),
        ));
    }
    html.push_str("</tbody></table>\n");

    // Raw JSON
    html.push_str("<details>\n<summary>Raw JSON data</summary>\n<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(report)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n</details>\n");

    html.push_str("</body>\n</html>\n");
    html
}

/// Write the HTML report to a file.
pub fn write_html_report(report: &EvaluationReport, path: &Path) -> Result<()> {
    std::fs::write(path, generate_html(report))
        .with_context(|| format!("failed to write HTML report to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortboard_core::board::Board;
    use sortboard_core::model::{Catalog, Phase, Task, ZoneId};

    fn report() -> EvaluationReport {
        let catalog = Catalog::new(vec![
            Task {
                id: "a".into(),
                label: "Define <scope>".into(),
                phase: Phase::Planning,
            },
            Task {
                id: "b".into(),
                label: "Close project".into(),
                phase: Phase::Closing,
            },
        ]);
        let mut board = Board::unshuffled(catalog);
        board.place("a", ZoneId::Phase(Phase::Planning));
        EvaluationReport::evaluate(&board)
    }

    #[test]
    fn html_is_self_contained_and_classed() {
        let html = generate_html(&report());
        assert!(html.contains("<style>"));
        assert!(html.contains("class=\"high\">100.0%"));
        assert!(html.contains("class=\"low\">0.0%"));
        assert!(html.contains("Raw JSON data"));
    }

    #[test]
    fn html_escape_special_chars() {
        assert_eq!(html_escape("<a & \"b\">"), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn html_writes_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.html");
        write_html_report(&report(), &path).unwrap();
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .starts_with("<!DOCTYPE html>"));
    }
}
