use crate::Score;

/// Tunable rule constants. The cabo threshold drifted between
/// deployments (5, 9, "under 10"), so it is configuration rather than
/// a structural constant; the hosting binary exposes it as a flag.
#[derive(Debug, Clone, Copy)]
pub struct Rules {
    pub cabo_threshold: Score,
    pub hand_size: usize,
    pub peeks: u8,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            cabo_threshold: 9,
            hand_size: crate::HAND,
            peeks: crate::PEEKS,
        }
    }
}
