//! The `sortboard replay` command.
//!
//! Drives the placement protocol from a recorded event script, standing in
//! for the interactive host surface. Cards are rendered as a simple vertical
//! stack, so pointer coordinates in scripts are plain row offsets.

use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

use sortboard_core::board::Board;
use sortboard_core::drag::{CardView, DragController, DragEvent};
use sortboard_core::model::{Phase, ZoneId};
use sortboard_core::report::EvaluationReport;
use sortboard_core::resolver::CardBounds;
use sortboard_core::scoring::score_board;

/// Height every replayed card is rendered at.
const CARD_HEIGHT: f64 = 48.0;

#[derive(Debug, Deserialize)]
struct EventScript {
    events: Vec<ScriptEvent>,
}

/// One recorded user interaction.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ScriptEvent {
    DragStart { card: String },
    DragOver { zone: String, pointer_y: f64 },
    Drop,
    DragEnd,
    Shuffle,
    Clear { zone: String },
    Reset,
}

/// The zone's current cards as a vertical stack from y = 0.
fn stacked_views(board: &Board, zone: ZoneId) -> Vec<CardView> {
    board
        .zone(zone)
        .iter()
        .enumerate()
        .map(|(i, id)| CardView {
            id: id.clone(),
            bounds: CardBounds {
                top: i as f64 * CARD_HEIGHT,
                height: CARD_HEIGHT,
            },
        })
        .collect()
}

fn parse_zone(name: &str) -> Option<ZoneId> {
    match name.parse::<ZoneId>() {
        Ok(zone) => Some(zone),
        Err(_) => {
            tracing::warn!("event references unknown zone '{name}', skipping");
            None
        }
    }
}

pub async fn execute(
    catalog_path: PathBuf,
    events_path: PathBuf,
    seed: Option<u64>,
    output: Option<PathBuf>,
    format: String,
) -> Result<()> {
    let catalog = super::load_catalog(&catalog_path).await?;

    let script_json = std::fs::read_to_string(&events_path)
        .with_context(|| format!("failed to read events from {}", events_path.display()))?;
    let script: EventScript =
        serde_json::from_str(&script_json).context("failed to parse event script")?;

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let mut board = Board::new(catalog, &mut rng);
    let mut controller = DragController::new();

    let mut mutations = 0usize;
    for event in script.events {
        let mutated = match event {
            ScriptEvent::DragStart { card } => {
                controller.handle(&mut board, DragEvent::Start { card })
            }
            ScriptEvent::DragOver { zone, pointer_y } => match parse_zone(&zone) {
                Some(zone) => {
                    let cards = stacked_views(&board, zone);
                    controller.handle(
                        &mut board,
                        DragEvent::Over {
                            zone,
                            cards,
                            pointer_y,
                        },
                    )
                }
                None => false,
            },
            ScriptEvent::Drop => controller.handle(&mut board, DragEvent::Drop),
            ScriptEvent::DragEnd => controller.handle(&mut board, DragEvent::End),
            ScriptEvent::Shuffle => {
                board.shuffle_pending(&mut rng);
                true
            }
            ScriptEvent::Clear { zone } => match parse_zone(&zone) {
                Some(ZoneId::Phase(phase)) => board.clear_zone_to_pending(phase, &mut rng),
                Some(ZoneId::Pending) => {
                    tracing::warn!("cannot clear the pending zone into itself, skipping");
                    false
                }
                None => false,
            },
            ScriptEvent::Reset => {
                board.reset_to_pending(&mut rng);
                true
            }
        };

        // Scores are recomputed from full zone contents after every mutation.
        if mutated {
            mutations += 1;
            let scores = score_board(&board);
            tracing::debug!(
                "after mutation {mutations}: total accuracy {:.1}%",
                scores.accuracy_pct
            );
        }
    }

    println!("Replayed {mutations} board mutation(s).\n");
    for &phase in &Phase::ALL {
        let zone = board.zone(ZoneId::Phase(phase));
        println!("{phase}: {}", zone.join(", "));
    }
    println!("pending: {} cards\n", board.zone(ZoneId::Pending).len());

    let report = EvaluationReport::evaluate(&board);
    super::print_scores(&report.scores);

    if let Some(output) = &output {
        super::write_reports(&report, output, &format)?;
    }

    Ok(())
}
