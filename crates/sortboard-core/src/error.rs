//! Typed errors for catalog loading and layout application.
//!
//! Defined here so callers can classify failures without string matching.
//! Everything else in the protocol degrades to a logged no-op instead of an
//! error: missing zones, unknown card ids, and empty-sequence percentage math
//! all produce "nothing happens" / zero-valued results.

use thiserror::Error;

/// Failure to load or parse the task catalog.
///
/// A catalog failure is non-fatal to a long-lived host: no board is
/// constructed and nothing renders. It is never retried.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog source could not be read.
    #[error("failed to read catalog from {path}: {source}")]
    Unreachable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog document is malformed (bad JSON, missing fields, or an
    /// unknown phase name).
    #[error("malformed catalog: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The catalog parsed but contains no tasks.
    #[error("catalog contains no tasks")]
    Empty,

    /// Two tasks share the same id.
    #[error("duplicate task id: {0}")]
    DuplicateTask(String),
}

/// Failure to apply a saved layout to a catalog.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The layout document is malformed.
    #[error("malformed layout: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A task id appears in more than one zone (or twice in one zone),
    /// which would break the board partition.
    #[error("task '{0}' is placed more than once")]
    DuplicatePlacement(String),
}
