//! sortboard-report — evaluation report rendering.
//!
//! Turns an [`EvaluationReport`](sortboard_core::report::EvaluationReport)
//! into Markdown or a self-contained HTML page.

pub mod html;
pub mod markdown;
