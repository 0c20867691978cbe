//! Evaluation report types with JSON persistence.
//!
//! An evaluation snapshot: the per-phase breakdown plus the global summary,
//! as produced when the user asks for a full evaluation of the board.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::board::Board;
use crate::scoring::{score_board, BoardScores};

/// A complete board evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the evaluation ran.
    pub created_at: DateTime<Utc>,
    /// Summary of the catalog being sorted.
    pub catalog: CatalogSummary,
    /// Per-phase and global scores.
    pub scores: BoardScores,
}

/// Summary of a catalog (without the full task definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub task_count: usize,
}

impl EvaluationReport {
    /// Evaluate the board's current state.
    pub fn evaluate(board: &Board) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            catalog: CatalogSummary {
                task_count: board.catalog().len(),
            },
            scores: score_board(board),
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: EvaluationReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
