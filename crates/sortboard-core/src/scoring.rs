//! The scoring engine: placement accuracy and relative-order scores.
//!
//! Scores are recomputed in full from current zone contents after every
//! mutating operation. No incremental bookkeeping: catalogs are tens of
//! items, and full recomputation keeps the logic trivially correct.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::model::{Phase, ZoneId};

/// Color classification of a displayed percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Low,
    Medium,
    High,
}

impl Rating {
    /// Pure function of the numeric value, applied uniformly to every
    /// displayed percentage: `< 50` low, `< 85` medium, otherwise high.
    pub fn classify(pct: f64) -> Self {
        if pct < 50.0 {
            Rating::Low
        } else if pct < 85.0 {
            Rating::Medium
        } else {
            Rating::High
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Low => write!(f, "low"),
            Rating::Medium => write!(f, "medium"),
            Rating::High => write!(f, "high"),
        }
    }
}

/// Scores for one phase zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseScores {
    /// The zone's phase.
    pub phase: Phase,
    /// Cards currently placed in the zone.
    pub placed: usize,
    /// Placed cards whose true phase matches the zone.
    pub correct: usize,
    /// Size of the master sequence for this phase.
    pub expected: usize,
    /// `correct / expected` as a percentage, one decimal.
    pub accuracy_pct: f64,
    pub accuracy_rating: Rating,
    /// Cards positioned consistently with master-sequence order.
    pub order_points: usize,
    /// `order_points / placed` as a percentage, one decimal.
    pub order_pct: f64,
    pub order_rating: Rating,
}

/// Scores for the whole board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardScores {
    /// Per-phase breakdown, in process order.
    pub phases: Vec<PhaseScores>,
    /// Cards still in the pending pool.
    pub pending: usize,
    /// `pending / catalog size` as a percentage, one decimal.
    pub pending_pct: f64,
    /// Correctly placed cards across all phase zones.
    pub total_correct: usize,
    /// `total_correct / catalog size` as a percentage, one decimal.
    pub accuracy_pct: f64,
    pub accuracy_rating: Rating,
}

/// Compute per-zone and global scores from the board's current contents.
pub fn score_board(board: &Board) -> BoardScores {
    let catalog = board.catalog();
    let mut phases = Vec::with_capacity(Phase::ALL.len());
    let mut total_correct = 0;

    for &phase in &Phase::ALL {
        let zone = board.zone(ZoneId::Phase(phase));
        let master = catalog.master_sequence(phase);

        let correct = zone
            .iter()
            .filter(|id| catalog.get(id).is_some_and(|t| t.phase == phase))
            .count();
        total_correct += correct;

        let order_points = order_points(zone, &master);

        let accuracy_pct = percentage(correct, master.len());
        let order_pct = percentage(order_points, zone.len());
        phases.push(PhaseScores {
            phase,
            placed: zone.len(),
            correct,
            expected: master.len(),
            accuracy_pct,
            accuracy_rating: Rating::classify(accuracy_pct),
            order_points,
            order_pct,
            order_rating: Rating::classify(order_pct),
        });
    }

    let pending = board.zone(ZoneId::Pending).len();
    let pending_pct = percentage(pending, catalog.len());
    let accuracy_pct = percentage(total_correct, catalog.len());

    BoardScores {
        phases,
        pending,
        pending_pct,
        total_correct,
        accuracy_pct,
        accuracy_rating: Rating::classify(accuracy_pct),
    }
}

/// Walk a zone sequence and count cards whose position is consistent with
/// the master ordering.
///
/// A card in the master sequence scores iff it opens the zone and also opens
/// the master sequence, or its immediate predecessor in the zone is also a
/// master card with a strictly smaller master position. Cards outside the
/// master sequence never score but still occupy positions, so they decide
/// what "predecessor" means for the card after them.
fn order_points(zone: &[String], master: &[&str]) -> usize {
    let master_pos: HashMap<&str, usize> = master
        .iter()
        .enumerate()
        .map(|(i, &id)| (id, i))
        .collect();

    let mut points = 0;
    for (index, id) in zone.iter().enumerate() {
        let Some(&pos) = master_pos.get(id.as_str()) else {
            continue;
        };
        if index == 0 {
            if pos == 0 {
                points += 1;
            }
        } else if let Some(&prev_pos) = master_pos.get(zone[index - 1].as_str()) {
            if pos > prev_pos {
                points += 1;
            }
        }
    }
    points
}

/// `count / total` as a percentage rounded to one decimal; a zero
/// denominator is defined as `0.0`, never an error.
fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = count as f64 / total as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}
