//! Insertion-point resolution for pointer-driven card placement.
//!
//! Given the vertical geometry of the cards currently visible in a zone and a
//! pointer coordinate, decides where a dragged card would be inserted. The
//! result is purely an insertion indicator; the actual move commits on drop.

/// Vertical extent of a rendered card, as reported by the host surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardBounds {
    pub top: f64,
    pub height: f64,
}

impl CardBounds {
    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Where a dragged card would land in a zone's sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// In front of the candidate card at this index.
    Before(usize),
    /// After every card in the zone.
    End,
}

/// Resolve the insertion index for a pointer hovering at `pointer_y`.
///
/// `cards` is the zone's current sequence of visible cards, top to bottom,
/// already excluding the card being dragged and any placeholder marker.
/// Among the cards whose midpoint lies below the pointer, the nearest one
/// wins; if the pointer is below every midpoint (or the zone is empty) the
/// card appends at the end.
pub fn resolve_insertion_index(cards: &[CardBounds], pointer_y: f64) -> InsertPosition {
    let mut closest: Option<(usize, f64)> = None;

    for (index, card) in cards.iter().enumerate() {
        let offset = pointer_y - card.midpoint();
        if offset < 0.0 {
            match closest {
                Some((_, best)) if offset <= best => {}
                _ => closest = Some((index, offset)),
            }
        }
    }

    match closest {
        Some((index, _)) => InsertPosition::Before(index),
        None => InsertPosition::End,
    }
}
