//! The drag-and-drop placement protocol.
//!
//! A [`DragController`] runs the per-card state machine (`Idle -> Dragging ->
//! Idle`) and owns the single shared placeholder marker. The host surface
//! feeds it pointer events; the controller answers with placeholder moves and
//! commits card moves into the [`Board`] on drop.
//!
//! The placeholder is process-wide state: created once, relocated on every
//! drag-over, removed on drop or drag-end, never duplicated.

use crate::board::Board;
use crate::model::ZoneId;
use crate::resolver::{resolve_insertion_index, CardBounds, InsertPosition};

/// A card as the host surface currently renders it inside a zone.
#[derive(Debug, Clone)]
pub struct CardView {
    pub id: String,
    pub bounds: CardBounds,
}

/// Where the shared placeholder currently sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderPos {
    /// Zone the placeholder is parked in.
    pub zone: ZoneId,
    /// Card the placeholder sits in front of; `None` means end of zone.
    ///
    /// Anchoring to a card id rather than an index keeps the marker stable
    /// while the dragged card's own slot shifts underneath it.
    pub before: Option<String>,
}

/// A pointer event routed from the host surface.
///
/// The single dispatch point for the protocol: the controller inspects the
/// event's subject and ignores anything that is not a draggable card or a
/// known zone.
#[derive(Debug, Clone)]
pub enum DragEvent {
    /// A card was picked up.
    Start { card: String },
    /// The pointer is hovering over a zone at `pointer_y`, with `cards`
    /// describing the zone's visible card geometry, top to bottom.
    Over {
        zone: ZoneId,
        cards: Vec<CardView>,
        pointer_y: f64,
    },
    /// The card was released over the zone the placeholder is parked in.
    Drop,
    /// The drag gesture ended, successfully or not.
    End,
}

/// Drop-protocol state machine and placeholder owner.
#[derive(Debug, Default)]
pub struct DragController {
    dragging: Option<String>,
    placeholder: Option<PlaceholderPos>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The card currently being dragged, if any.
    pub fn dragging(&self) -> Option<&str> {
        self.dragging.as_deref()
    }

    /// Current placeholder position, if one is shown.
    pub fn placeholder(&self) -> Option<&PlaceholderPos> {
        self.placeholder.as_ref()
    }

    /// Route one event through the protocol. Returns `true` when the board
    /// was mutated and scores must be recomputed.
    pub fn handle(&mut self, board: &mut Board, event: DragEvent) -> bool {
        match event {
            DragEvent::Start { card } => {
                self.drag_start(board, &card);
                false
            }
            DragEvent::Over {
                zone,
                cards,
                pointer_y,
            } => {
                self.drag_over(zone, &cards, pointer_y);
                false
            }
            DragEvent::Drop => self.drop(board),
            DragEvent::End => {
                self.drag_end();
                false
            }
        }
    }

    /// Begin dragging a card. Subjects that are not catalog cards are
    /// ignored (dispatch-by-tag: only draggable cards enter the protocol).
    pub fn drag_start(&mut self, board: &Board, card_id: &str) {
        if !board.catalog().contains(card_id) {
            tracing::debug!("drag-start on non-card subject '{card_id}', ignoring");
            return;
        }
        self.dragging = Some(card_id.to_string());
    }

    /// Hover over a zone: resolve the insertion point among the visible
    /// cards (the dragged card itself never counts as a candidate) and
    /// relocate the shared placeholder there.
    pub fn drag_over(&mut self, zone: ZoneId, cards: &[CardView], pointer_y: f64) {
        let Some(dragging) = self.dragging.as_deref() else {
            return;
        };

        let candidates: Vec<&CardView> = cards.iter().filter(|c| c.id != dragging).collect();
        let bounds: Vec<CardBounds> = candidates.iter().map(|c| c.bounds).collect();

        let before = match resolve_insertion_index(&bounds, pointer_y) {
            InsertPosition::Before(i) => Some(candidates[i].id.clone()),
            InsertPosition::End => None,
        };
        self.placeholder = Some(PlaceholderPos { zone, before });
    }

    /// Release the card: move it to the placeholder's exact position and
    /// clear the marker. Returns `true` when a move committed (the host
    /// should rescore). Without an active drag or a parked placeholder this
    /// is a no-op.
    pub fn drop(&mut self, board: &mut Board) -> bool {
        let Some(placeholder) = self.placeholder.take() else {
            return false;
        };
        let Some(card) = self.dragging.as_deref() else {
            return false;
        };
        board.move_task_before(card, placeholder.zone, placeholder.before.as_deref())
    }

    /// End the gesture: unconditionally clear the dragging flag and remove
    /// the placeholder, whether or not a drop happened. Guarantees no stuck
    /// state after cancelled or out-of-zone releases.
    pub fn drag_end(&mut self) {
        self.dragging = None;
        self.placeholder = None;
    }
}
