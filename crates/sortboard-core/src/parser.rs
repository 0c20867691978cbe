//! JSON catalog and layout parsing, with validation.
//!
//! The catalog wire format is `{"tasks": [{"id", "content", "group"}]}`; a
//! layout is a map from zone name to an ordered list of task ids.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{CatalogError, LayoutError};
use crate::model::{Catalog, Task, ZoneId};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    tasks: Vec<Task>,
}

/// Parse a JSON catalog document.
///
/// Rejects malformed JSON, unknown phase names, empty catalogs, and
/// duplicate task ids. Any of these is the board's data-load failure: the
/// caller logs it and constructs no board.
pub fn parse_catalog_str(content: &str) -> Result<Catalog, CatalogError> {
    let parsed: CatalogFile = serde_json::from_str(content)?;

    if parsed.tasks.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::new();
    for task in &parsed.tasks {
        if !seen.insert(task.id.as_str()) {
            return Err(CatalogError::DuplicateTask(task.id.clone()));
        }
    }

    Ok(Catalog::new(parsed.tasks))
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The task id (if applicable).
    pub task_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a catalog for common authoring issues.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for task in catalog.tasks() {
        if task.label.trim().is_empty() {
            warnings.push(ValidationWarning {
                task_id: Some(task.id.clone()),
                message: "label is empty".into(),
            });
        }
    }

    for &phase in &crate::model::Phase::ALL {
        if catalog.master_sequence(phase).is_empty() {
            warnings.push(ValidationWarning {
                task_id: None,
                message: format!("phase '{phase}' has no tasks; its scores will stay 0.0"),
            });
        }
    }

    warnings
}

/// A saved board arrangement: zone name to ordered task ids.
///
/// Zones and tasks may be partial; anything unplaced stays pending.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default)]
    pub zones: BTreeMap<String, Vec<String>>,
}

/// Parse a JSON layout document.
pub fn parse_layout_str(content: &str) -> Result<Layout, LayoutError> {
    Ok(serde_json::from_str(content)?)
}

/// Re-create a board from a catalog and a saved layout.
///
/// Unknown zone names and unknown task ids are skipped with a warning; a
/// task placed twice is an error, since it would break the partition. Tasks
/// the layout never mentions remain pending in catalog order.
pub fn apply_layout(catalog: Catalog, layout: &Layout) -> Result<Board, LayoutError> {
    let mut board = Board::unshuffled(catalog);
    let mut placed: HashSet<String> = HashSet::new();

    for (zone_name, task_ids) in &layout.zones {
        let Ok(zone) = zone_name.parse::<ZoneId>() else {
            tracing::warn!("layout references unknown zone '{zone_name}', skipping");
            continue;
        };
        for id in task_ids {
            if !board.catalog().contains(id) {
                tracing::warn!("layout references unknown task '{id}', skipping");
                continue;
            }
            if !placed.insert(id.clone()) {
                return Err(LayoutError::DuplicatePlacement(id.clone()));
            }
            board.place(id, zone);
        }
    }

    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Phase;

    const VALID_CATALOG: &str = r#"{
  "tasks": [
    { "id": "t1", "content": "Develop project charter", "group": "INITIATING" },
    { "id": "t2", "content": "Define scope", "group": "PLANNING" },
    { "id": "t3", "content": "Create WBS", "group": "PLANNING" },
    { "id": "t4", "content": "Direct project work", "group": "EXECUTING" },
    { "id": "t5", "content": "Control costs", "group": "MONITORING" },
    { "id": "t6", "content": "Close project", "group": "CLOSING" }
  ]
}"#;

    #[test]
    fn parse_valid_catalog() {
        let catalog = parse_catalog_str(VALID_CATALOG).unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.master_sequence(Phase::Planning), vec!["t2", "t3"]);
    }

    #[test]
    fn parse_malformed_json() {
        assert!(matches!(
            parse_catalog_str("{not json"),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn parse_unknown_phase_is_malformed() {
        let bad = r#"{"tasks": [{"id": "t1", "content": "x", "group": "LIMBO"}]}"#;
        assert!(matches!(
            parse_catalog_str(bad),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn parse_missing_field_is_malformed() {
        let bad = r#"{"tasks": [{"id": "t1", "group": "PLANNING"}]}"#;
        assert!(matches!(
            parse_catalog_str(bad),
            Err(CatalogError::Malformed(_))
        ));
    }

    #[test]
    fn parse_empty_catalog() {
        assert!(matches!(
            parse_catalog_str(r#"{"tasks": []}"#),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn parse_duplicate_ids() {
        let bad = r#"{"tasks": [
            {"id": "t1", "content": "a", "group": "PLANNING"},
            {"id": "t1", "content": "b", "group": "CLOSING"}
        ]}"#;
        assert!(matches!(
            parse_catalog_str(bad),
            Err(CatalogError::DuplicateTask(id)) if id == "t1"
        ));
    }

    #[test]
    fn validate_reports_empty_labels_and_phases() {
        let catalog = parse_catalog_str(
            r#"{"tasks": [{"id": "t1", "content": "  ", "group": "PLANNING"}]}"#,
        )
        .unwrap();
        let warnings = validate_catalog(&catalog);
        assert!(warnings.iter().any(|w| w.message.contains("label is empty")));
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("'closing' has no tasks")));
    }

    #[test]
    fn apply_layout_places_and_defaults_to_pending() {
        let catalog = parse_catalog_str(VALID_CATALOG).unwrap();
        let layout = parse_layout_str(
            r#"{"zones": {"planning": ["t3", "t2"], "closing": ["t6"]}}"#,
        )
        .unwrap();

        let board = apply_layout(catalog, &layout).unwrap();
        assert_eq!(board.zone(ZoneId::Phase(Phase::Planning)), ["t3", "t2"]);
        assert_eq!(board.zone(ZoneId::Phase(Phase::Closing)), ["t6"]);
        // The rest stays pending, in catalog order.
        assert_eq!(board.zone(ZoneId::Pending), ["t1", "t4", "t5"]);
        assert!(board.partition_intact());
    }

    #[test]
    fn apply_layout_skips_unknown_zone_and_task() {
        let catalog = parse_catalog_str(VALID_CATALOG).unwrap();
        let layout = parse_layout_str(
            r#"{"zones": {"limbo": ["t2"], "planning": ["t2", "ghost"]}}"#,
        )
        .unwrap();

        let board = apply_layout(catalog, &layout).unwrap();
        assert_eq!(board.zone(ZoneId::Phase(Phase::Planning)), ["t2"]);
        assert!(board.partition_intact());
    }

    #[test]
    fn apply_layout_rejects_duplicate_placement() {
        let catalog = parse_catalog_str(VALID_CATALOG).unwrap();
        let layout = parse_layout_str(
            r#"{"zones": {"planning": ["t2"], "executing": ["t2"]}}"#,
        )
        .unwrap();

        assert!(matches!(
            apply_layout(catalog, &layout),
            Err(LayoutError::DuplicatePlacement(id)) if id == "t2"
        ));
    }
}
