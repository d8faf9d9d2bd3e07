use crate::SEATS;
use std::collections::HashSet;

/// Per-player record of which hand slots that player currently knows
/// the true value of. Knowledge is tracked independently of hand
/// contents: the authoritative hand always holds real cards, and the
/// projection layer consults this ledger before serializing any slot
/// to a viewer.
///
/// Entries are added on initial peeks, power reveals, and (for both
/// viewers at once) failed-burn reveals. They are dropped whenever the
/// slot's card changes, and wholesale at round end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    known: [HashSet<(usize, usize)>; SEATS],
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            known: std::array::from_fn(|_| HashSet::new()),
        }
    }
}

impl Ledger {
    /// Viewer now knows the card at (owner, index).
    pub fn record(&mut self, viewer: usize, owner: usize, index: usize) {
        self.known[viewer].insert((owner, index));
    }

    /// Both viewers now know the card at (owner, index). Used for the
    /// failed-burn reveal, the one explicitly public leak.
    pub fn publish(&mut self, owner: usize, index: usize) {
        for viewer in 0..SEATS {
            self.record(viewer, owner, index);
        }
    }

    pub fn knows(&self, viewer: usize, owner: usize, index: usize) -> bool {
        self.known[viewer].contains(&(owner, index))
    }

    /// The card at (owner, index) changed; nobody knows it anymore.
    pub fn invalidate(&mut self, owner: usize, index: usize) {
        for viewer in self.known.iter_mut() {
            viewer.remove(&(owner, index));
        }
    }

    /// A slot was removed from owner's hand: forget it and shift every
    /// entry above it down one so knowledge tracks the surviving cards.
    pub fn collapse(&mut self, owner: usize, index: usize) {
        for viewer in self.known.iter_mut() {
            *viewer = viewer
                .drain()
                .filter_map(|(o, i)| match (o == owner, i.cmp(&index)) {
                    (false, _) => Some((o, i)),
                    (true, std::cmp::Ordering::Less) => Some((o, i)),
                    (true, std::cmp::Ordering::Equal) => None,
                    (true, std::cmp::Ordering::Greater) => Some((o, i - 1)),
                })
                .collect();
        }
    }

    pub fn clear(&mut self) {
        for viewer in self.known.iter_mut() {
            viewer.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knowledge_is_per_viewer() {
        let mut ledger = Ledger::default();
        ledger.record(0, 0, 2);
        assert!(ledger.knows(0, 0, 2));
        assert!(!ledger.knows(1, 0, 2));
    }

    #[test]
    fn publish_reaches_both() {
        let mut ledger = Ledger::default();
        ledger.publish(1, 3);
        assert!(ledger.knows(0, 1, 3));
        assert!(ledger.knows(1, 1, 3));
    }

    #[test]
    fn invalidate_clears_both() {
        let mut ledger = Ledger::default();
        ledger.publish(0, 1);
        ledger.invalidate(0, 1);
        assert!(!ledger.knows(0, 0, 1));
        assert!(!ledger.knows(1, 0, 1));
    }

    #[test]
    fn collapse_shifts_higher_slots() {
        let mut ledger = Ledger::default();
        ledger.record(0, 1, 0);
        ledger.record(0, 1, 1);
        ledger.record(0, 1, 3);
        ledger.record(0, 0, 3);
        ledger.collapse(1, 1);
        assert!(ledger.knows(0, 1, 0));
        assert!(!ledger.knows(0, 1, 1));
        assert!(ledger.knows(0, 1, 2));
        assert!(ledger.knows(0, 0, 3));
    }
}
