use crate::cards::Rank;

/// Side effects attached to drawn or center-played cards.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Power {
    /// 7/8: look at one of your own slots.
    PeekOwn,
    /// 9/10: look at one opponent slot.
    PeekOpponent,
    /// J: skip the opponent's next turn. Heads-up, the turn comes
    /// straight back to the player of the jack.
    Skip,
    /// Q: swap one own slot with one opponent slot, sight unseen.
    BlindSwap,
    /// K: preview both nominated slots, then commit or decline.
    SeenSwap,
}

impl Power {
    pub fn of(rank: Rank) -> Option<Self> {
        match rank {
            Rank::Seven | Rank::Eight => Some(Power::PeekOwn),
            Rank::Nine | Rank::Ten => Some(Power::PeekOpponent),
            Rank::Jack => Some(Power::Skip),
            Rank::Queen => Some(Power::BlindSwap),
            Rank::King => Some(Power::SeenSwap),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_ranks_are_plain() {
        for rank in [Rank::Ace, Rank::Two, Rank::Six] {
            assert!(Power::of(rank) == None);
        }
    }

    #[test]
    fn court_and_high_pips_have_powers() {
        assert!(Power::of(Rank::Seven) == Some(Power::PeekOwn));
        assert!(Power::of(Rank::Ten) == Some(Power::PeekOpponent));
        assert!(Power::of(Rank::Jack) == Some(Power::Skip));
        assert!(Power::of(Rank::Queen) == Some(Power::BlindSwap));
        assert!(Power::of(Rank::King) == Some(Power::SeenSwap));
    }
}
