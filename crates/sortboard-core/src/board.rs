//! The authoritative board state: one pending pool plus one zone per phase.
//!
//! The board owns every zone exclusively. Invariant: at any observation point
//! every catalog task lives in exactly one zone, exactly once. Every mutating
//! operation here preserves that partition.

use std::collections::BTreeMap;

use rand::Rng;

use crate::model::{Catalog, Phase, Task, ZoneId};
use crate::shuffle::fisher_yates;

/// The set of all zones plus the master task catalog.
#[derive(Debug, Clone)]
pub struct Board {
    catalog: Catalog,
    pending: Vec<String>,
    phases: BTreeMap<Phase, Vec<String>>,
}

impl Board {
    /// Create a board with every task in the pending pool, shuffled.
    pub fn new<R: Rng + ?Sized>(catalog: Catalog, rng: &mut R) -> Self {
        let mut board = Self::unshuffled(catalog);
        board.shuffle_pending(rng);
        board
    }

    /// Create a board with every task pending, in catalog order.
    ///
    /// Used when re-creating a saved state, where the caller positions cards
    /// explicitly and no shuffle entropy is wanted.
    pub fn unshuffled(catalog: Catalog) -> Self {
        let pending = catalog.tasks().iter().map(|t| t.id.clone()).collect();
        let phases = Phase::ALL.iter().map(|&p| (p, Vec::new())).collect();
        Self {
            catalog,
            pending,
            phases,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The ordered card sequence of a zone.
    pub fn zone(&self, id: ZoneId) -> &[String] {
        match id {
            ZoneId::Pending => &self.pending,
            // Every phase key is inserted at construction.
            ZoneId::Phase(p) => &self.phases[&p],
        }
    }

    /// Which zone currently holds `task_id`.
    pub fn zone_of(&self, task_id: &str) -> Option<ZoneId> {
        if self.pending.iter().any(|t| t == task_id) {
            return Some(ZoneId::Pending);
        }
        self.phases
            .iter()
            .find(|(_, tasks)| tasks.iter().any(|t| t == task_id))
            .map(|(&p, _)| ZoneId::Phase(p))
    }

    /// Re-shuffle the pending pool's current contents in place.
    ///
    /// Phase zones are never touched, so the partition holds no matter when
    /// the host invokes this.
    pub fn shuffle_pending<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        fisher_yates(&mut self.pending, rng);
    }

    /// Move a card into `dest`, in front of the card named by `before`
    /// (append at the end when `before` is `None`).
    ///
    /// This is the drop commit: the card leaves whichever zone holds it and
    /// is spliced into the destination sequence. Returns `false` (and changes
    /// nothing) if the card id is unknown.
    pub fn move_task_before(&mut self, task_id: &str, dest: ZoneId, before: Option<&str>) -> bool {
        if !self.catalog.contains(task_id) {
            tracing::warn!("ignoring move of unknown card '{task_id}'");
            return false;
        }
        let id = self.take(task_id);

        let dest_zone = self.zone_vec_mut(dest);
        let index = match before {
            Some(anchor) => dest_zone
                .iter()
                .position(|t| t == anchor)
                .unwrap_or(dest_zone.len()),
            None => dest_zone.len(),
        };
        dest_zone.insert(index, id);
        true
    }

    /// Append a card to the end of a zone. Used when applying saved layouts.
    pub fn place(&mut self, task_id: &str, dest: ZoneId) -> bool {
        self.move_task_before(task_id, dest, None)
    }

    /// Drain one phase zone back into pending, shuffling the merged pool.
    ///
    /// Observable no-op when the zone is already empty. Returns whether
    /// anything moved.
    pub fn clear_zone_to_pending<R: Rng + ?Sized>(&mut self, phase: Phase, rng: &mut R) -> bool {
        let drained = std::mem::take(self.zone_vec_mut(ZoneId::Phase(phase)));
        if drained.is_empty() {
            return false;
        }
        self.merge_into_pending(drained, rng);
        true
    }

    /// Drain every phase zone back into pending at once: collect from all
    /// zones first, then merge, shuffle, and repopulate pending with a single
    /// shuffle pass.
    pub fn reset_to_pending<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut returned = Vec::new();
        for &phase in &Phase::ALL {
            returned.append(self.zone_vec_mut(ZoneId::Phase(phase)));
        }
        if returned.is_empty() {
            return;
        }
        self.merge_into_pending(returned, rng);
    }

    /// Pending cards whose label contains `query`, case-insensitively.
    ///
    /// Display filter only: membership and scoring are unaffected.
    pub fn filter_pending(&self, query: &str) -> Vec<&Task> {
        let needle = query.to_lowercase();
        self.pending
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .filter(|t| t.label.to_lowercase().contains(&needle))
            .collect()
    }

    /// Whether every catalog task sits in exactly one zone exactly once.
    pub fn partition_intact(&self) -> bool {
        let mut seen: Vec<&str> = self
            .pending
            .iter()
            .chain(self.phases.values().flatten())
            .map(String::as_str)
            .collect();
        if seen.len() != self.catalog.len() {
            return false;
        }
        seen.sort_unstable();
        seen.dedup();
        seen.len() == self.catalog.len() && seen.iter().all(|id| self.catalog.contains(id))
    }

    fn zone_vec_mut(&mut self, id: ZoneId) -> &mut Vec<String> {
        match id {
            ZoneId::Pending => &mut self.pending,
            ZoneId::Phase(p) => self.phases.entry(p).or_default(),
        }
    }

    /// Remove a known card from whichever zone holds it and return its id.
    fn take(&mut self, task_id: &str) -> String {
        if let Some(pos) = self.pending.iter().position(|t| t == task_id) {
            return self.pending.remove(pos);
        }
        for tasks in self.phases.values_mut() {
            if let Some(pos) = tasks.iter().position(|t| t == task_id) {
                return tasks.remove(pos);
            }
        }
        // A catalog card is always resident somewhere (partition invariant).
        unreachable!("card '{task_id}' missing from every zone")
    }

    fn merge_into_pending<R: Rng + ?Sized>(&mut self, mut returned: Vec<String>, rng: &mut R) {
        returned.append(&mut self.pending);
        fisher_yates(&mut returned, rng);
        self.pending = returned;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog() -> Catalog {
        let tasks = [
            ("i1", Phase::Initiating),
            ("p1", Phase::Planning),
            ("p2", Phase::Planning),
            ("p3", Phase::Planning),
            ("e1", Phase::Executing),
            ("m1", Phase::Monitoring),
            ("c1", Phase::Closing),
        ];
        Catalog::new(
            tasks
                .iter()
                .map(|(id, phase)| Task {
                    id: (*id).into(),
                    label: format!("Task {id}"),
                    phase: *phase,
                })
                .collect(),
        )
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn new_board_is_all_pending() {
        let board = Board::new(catalog(), &mut rng());
        assert_eq!(board.zone(ZoneId::Pending).len(), 7);
        for &phase in &Phase::ALL {
            assert!(board.zone(ZoneId::Phase(phase)).is_empty());
        }
        assert!(board.partition_intact());
    }

    #[test]
    fn move_task_splices_before_anchor() {
        let mut board = Board::unshuffled(catalog());
        let planning = ZoneId::Phase(Phase::Planning);
        assert!(board.place("p1", planning));
        assert!(board.place("p3", planning));
        assert!(board.move_task_before("p2", planning, Some("p3")));

        assert_eq!(board.zone(planning), ["p1", "p2", "p3"]);
        assert!(board.partition_intact());
    }

    #[test]
    fn move_task_with_stale_anchor_appends() {
        let mut board = Board::unshuffled(catalog());
        let planning = ZoneId::Phase(Phase::Planning);
        board.place("p1", planning);
        // "e1" is still pending, so it cannot anchor an insert in planning.
        assert!(board.move_task_before("p2", planning, Some("e1")));
        assert_eq!(board.zone(planning), ["p1", "p2"]);
        assert!(board.partition_intact());
    }

    #[test]
    fn move_unknown_card_is_a_noop() {
        let mut board = Board::unshuffled(catalog());
        let before = board.clone();
        assert!(!board.move_task_before("ghost", ZoneId::Pending, None));
        assert_eq!(board.zone(ZoneId::Pending), before.zone(ZoneId::Pending));
        assert!(board.partition_intact());
    }

    #[test]
    fn clear_zone_returns_cards_to_pending() {
        let mut board = Board::unshuffled(catalog());
        let planning = ZoneId::Phase(Phase::Planning);
        board.place("p1", planning);
        board.place("e1", planning);
        assert_eq!(board.zone(ZoneId::Pending).len(), 5);

        assert!(board.clear_zone_to_pending(Phase::Planning, &mut rng()));
        assert!(board.zone(planning).is_empty());
        assert_eq!(board.zone(ZoneId::Pending).len(), 7);
        assert!(board.partition_intact());
    }

    #[test]
    fn clear_empty_zone_is_a_noop() {
        let mut board = Board::unshuffled(catalog());
        let pending_before = board.zone(ZoneId::Pending).to_vec();
        assert!(!board.clear_zone_to_pending(Phase::Closing, &mut rng()));
        // No observable change, not even a reshuffle of pending.
        assert_eq!(board.zone(ZoneId::Pending), pending_before);
    }

    #[test]
    fn reset_empties_every_phase_zone() {
        let mut board = Board::new(catalog(), &mut rng());
        board.place("p1", ZoneId::Phase(Phase::Planning));
        board.place("p2", ZoneId::Phase(Phase::Executing));
        board.place("c1", ZoneId::Phase(Phase::Closing));

        board.reset_to_pending(&mut rng());
        for &phase in &Phase::ALL {
            assert_eq!(board.zone(ZoneId::Phase(phase)).len(), 0);
        }
        assert_eq!(board.zone(ZoneId::Pending).len(), board.catalog().len());
        assert!(board.partition_intact());
    }

    #[test]
    fn partition_survives_operation_storm() {
        let mut rng = rng();
        let mut board = Board::new(catalog(), &mut rng);
        let ids: Vec<String> = board.catalog().tasks().iter().map(|t| t.id.clone()).collect();

        for round in 0..200 {
            match round % 5 {
                0 => {
                    let id = &ids[round % ids.len()];
                    let dest = ZoneId::Phase(Phase::ALL[round % 5]);
                    board.move_task_before(id, dest, None);
                }
                1 => board.shuffle_pending(&mut rng),
                2 => {
                    board.clear_zone_to_pending(Phase::ALL[round % 5], &mut rng);
                }
                3 => {
                    let id = &ids[(round * 3) % ids.len()];
                    board.move_task_before(id, ZoneId::Pending, None);
                }
                _ => board.reset_to_pending(&mut rng),
            }
            assert!(board.partition_intact(), "partition broken at round {round}");
        }
    }

    #[test]
    fn filter_pending_matches_case_insensitively() {
        let board = Board::unshuffled(catalog());
        let hits = board.filter_pending("task P");
        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|t| t.id.starts_with('p')));
        assert!(board.filter_pending("zzz").is_empty());
    }

    #[test]
    fn filter_ignores_cards_outside_pending() {
        let mut board = Board::unshuffled(catalog());
        board.place("p1", ZoneId::Phase(Phase::Planning));
        let hits = board.filter_pending("task p");
        assert_eq!(hits.len(), 2);
    }
}
