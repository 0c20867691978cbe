//! sortboard-core — Board model, placement protocol, and scoring.
//!
//! This crate defines the fundamental data model, the drag-and-drop placement
//! protocol, and the scoring logic that the entire sortboard system builds on.

pub mod board;
pub mod drag;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod resolver;
pub mod scoring;
pub mod shuffle;
pub mod source;
