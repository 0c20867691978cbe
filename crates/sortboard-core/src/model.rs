//! Core data model types for sortboard.
//!
//! These are the fundamental types the entire sortboard system uses to
//! represent tasks, phases, zones, and the task catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single sortable card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: String,
    /// Human-readable card label.
    #[serde(rename = "content")]
    pub label: String,
    /// The phase this task actually belongs to.
    #[serde(rename = "group")]
    pub phase: Phase,
}

/// The fixed set of correctness categories a task can belong to.
///
/// Closed set, known at build time. The enum order is the process order,
/// which is also the order zones are displayed and reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Phase {
    Initiating,
    Planning,
    Executing,
    Monitoring,
    Closing,
}

impl Phase {
    /// All phases, in process order.
    pub const ALL: [Phase; 5] = [
        Phase::Initiating,
        Phase::Planning,
        Phase::Executing,
        Phase::Monitoring,
        Phase::Closing,
    ];
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Initiating => write!(f, "initiating"),
            Phase::Planning => write!(f, "planning"),
            Phase::Executing => write!(f, "executing"),
            Phase::Monitoring => write!(f, "monitoring"),
            Phase::Closing => write!(f, "closing"),
        }
    }
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "initiating" => Ok(Phase::Initiating),
            "planning" => Ok(Phase::Planning),
            "executing" => Ok(Phase::Executing),
            "monitoring" => Ok(Phase::Monitoring),
            "closing" => Ok(Phase::Closing),
            other => Err(format!("unknown phase: {other}")),
        }
    }
}

/// A named card container: either the pending pool or one phase zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneId {
    Pending,
    Phase(Phase),
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneId::Pending => write!(f, "pending"),
            ZoneId::Phase(p) => write!(f, "{p}"),
        }
    }
}

impl FromStr for ZoneId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pending") {
            Ok(ZoneId::Pending)
        } else {
            s.parse::<Phase>().map(ZoneId::Phase)
        }
    }
}

/// The immutable master task catalog, loaded once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    tasks: Vec<Task>,
}

impl Catalog {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Look up a task by id.
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Whether `id` names a card in this catalog (i.e. a draggable subject).
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The ground-truth ordering for a phase: ids of tasks belonging to
    /// `phase`, in catalog order. Derived on demand, never stored.
    pub fn master_sequence(&self, phase: Phase) -> Vec<&str> {
        self.tasks
            .iter()
            .filter(|t| t.phase == phase)
            .map(|t| t.id.as_str())
            .collect()
    }
}
