use super::error::GameError;
use crate::Score;
use crate::cards::Card;

/// One of the two player slots in a room. Holds the authoritative hand;
/// what any viewer gets to see of it is decided by the Ledger, never
/// here. Hands shrink when a burn removes a slot, so positions are a
/// Vec rather than a fixed array.
#[derive(Debug, Clone)]
pub struct Seat {
    name: String,
    host: bool,
    hand: Vec<Card>,
    peeks: u8,
}

impl Seat {
    pub fn new(name: String, host: bool) -> Self {
        Self {
            name,
            host,
            hand: Vec::new(),
            peeks: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn host(&self) -> bool {
        self.host
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn peeks(&self) -> u8 {
        self.peeks
    }

    /// Hand total under scoring rules. Server-side only; never sent to
    /// any client before the round ends.
    pub fn score(&self) -> Score {
        self.hand.iter().map(Card::score).sum()
    }

    pub fn card(&self, index: usize) -> Result<Card, GameError> {
        self.hand
            .get(index)
            .copied()
            .ok_or(GameError::InvalidIndex(index))
    }

    /// Replace the card at a slot, returning the old occupant.
    pub fn replace(&mut self, index: usize, card: Card) -> Result<Card, GameError> {
        match self.hand.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, card)),
            None => Err(GameError::InvalidIndex(index)),
        }
    }

    /// Remove a slot entirely; the hand shrinks and higher positions
    /// shift down by one.
    pub fn remove(&mut self, index: usize) -> Result<Card, GameError> {
        if index < self.hand.len() {
            Ok(self.hand.remove(index))
        } else {
            Err(GameError::InvalidIndex(index))
        }
    }

    pub(crate) fn deal(&mut self, hand: Vec<Card>, peeks: u8) {
        self.hand = hand;
        self.peeks = peeks;
    }

    pub(crate) fn spend_peek(&mut self) -> Result<(), GameError> {
        match self.peeks.checked_sub(1) {
            Some(left) => {
                self.peeks = left;
                Ok(())
            }
            None => Err(GameError::NoPeeksLeft),
        }
    }

    pub(crate) fn exhaust_peeks(&mut self) {
        self.peeks = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::cards::Suit;

    fn seat() -> Seat {
        let mut seat = Seat::new("A".into(), true);
        seat.deal(
            vec![
                Card::from((Rank::King, Suit::Heart)),
                Card::from((Rank::Two, Suit::Club)),
                Card::from((Rank::Ten, Suit::Spade)),
                Card::from((Rank::Ace, Suit::Diamond)),
            ],
            2,
        );
        seat
    }

    #[test]
    fn score_counts_red_kings_negative() {
        assert!(seat().score() == -1 + 2 + 10 + 1);
    }

    #[test]
    fn remove_shrinks_hand() {
        let mut seat = seat();
        let card = seat.remove(1).unwrap();
        assert!(card == Card::from((Rank::Two, Suit::Club)));
        assert!(seat.hand().len() == 3);
        assert!(seat.card(1).unwrap() == Card::from((Rank::Ten, Suit::Spade)));
    }

    #[test]
    fn peeks_run_out() {
        let mut seat = seat();
        assert!(seat.spend_peek().is_ok());
        assert!(seat.spend_peek().is_ok());
        assert!(seat.spend_peek() == Err(GameError::NoPeeksLeft));
    }
}
