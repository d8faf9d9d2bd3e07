use super::card::Card;
use rand::seq::SliceRandom;
use std::collections::VecDeque;

/// Ordered draw pile. The front of the queue is the top of the pile;
/// construction from a Vec preserves draw order, so tests can stack
/// the deck deterministically.
#[derive(Debug, Clone, Default)]
pub struct Deck(VecDeque<Card>);

impl Deck {
    /// All 52 cards in sorted order.
    pub fn standard() -> Self {
        Self((0..52u8).map(Card::from).collect())
    }

    /// A freshly shuffled 52-card deck.
    pub fn shuffled() -> Self {
        let ref mut rng = rand::rng();
        let mut cards = (0..52u8).map(Card::from).collect::<Vec<_>>();
        cards.shuffle(rng);
        Self::from(cards)
    }

    /// Pop the top card, if any.
    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop_front()
    }

    /// Rebuild the pile from recycled discards, shuffled.
    pub fn recycle(&mut self, mut cards: Vec<Card>) {
        let ref mut rng = rand::rng();
        cards.shuffle(rng);
        self.0 = cards.into();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.0.iter()
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_is_52_unique() {
        let deck = Deck::standard();
        let unique = deck.cards().copied().collect::<HashSet<_>>();
        assert!(deck.len() == 52);
        assert!(unique.len() == 52);
    }

    #[test]
    fn shuffled_is_52_unique() {
        let deck = Deck::shuffled();
        let unique = deck.cards().copied().collect::<HashSet<_>>();
        assert!(unique.len() == 52);
    }

    #[test]
    fn draws_in_given_order() {
        let a = Card::from(0u8);
        let b = Card::from(13u8);
        let mut deck = Deck::from(vec![a, b]);
        assert!(deck.draw() == Some(a));
        assert!(deck.draw() == Some(b));
        assert!(deck.draw() == None);
    }
}
