//! The `sortboard validate` command.

use std::path::PathBuf;

use anyhow::Result;

use sortboard_core::model::Phase;
use sortboard_core::parser::validate_catalog;

pub async fn execute(catalog_path: PathBuf) -> Result<()> {
    let catalog = super::load_catalog(&catalog_path).await?;

    println!("Catalog: {} tasks", catalog.len());
    for &phase in &Phase::ALL {
        println!("  {phase}: {} tasks", catalog.master_sequence(phase).len());
    }

    let warnings = validate_catalog(&catalog);
    for w in &warnings {
        let prefix = w
            .task_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
