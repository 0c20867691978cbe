//! The `sortboard shuffle` command.

use std::path::PathBuf;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use sortboard_core::board::Board;
use sortboard_core::model::ZoneId;

pub async fn execute(catalog_path: PathBuf, seed: Option<u64>) -> Result<()> {
    let catalog = super::load_catalog(&catalog_path).await?;

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let board = Board::new(catalog, &mut rng);

    println!("Pending ({} cards):", board.zone(ZoneId::Pending).len());
    for id in board.zone(ZoneId::Pending) {
        // Pending ids always resolve: the board was just built from the catalog.
        if let Some(task) = board.catalog().get(id) {
            println!("  {id}: {}", task.label);
        }
    }

    Ok(())
}
