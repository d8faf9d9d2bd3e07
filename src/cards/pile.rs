use super::card::Card;

/// Shared center pile. A top-visible stack: only the top card is ever
/// public, everything beneath is dead until recycled into the draw pile.
#[derive(Debug, Clone, Default)]
pub struct Pile(Vec<Card>);

impl Pile {
    pub fn top(&self) -> Option<Card> {
        self.0.last().copied()
    }

    pub fn push(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Remove everything below the top card. Feeds draw-pile recycling
    /// when the draw pile runs dry mid-round.
    pub fn drain_below_top(&mut self) -> Vec<Card> {
        match self.0.pop() {
            Some(top) => std::mem::replace(&mut self.0, vec![top]),
            None => Vec::new(),
        }
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_keeps_top() {
        let mut pile = Pile::default();
        pile.push(Card::from(0u8));
        pile.push(Card::from(1u8));
        pile.push(Card::from(2u8));
        let below = pile.drain_below_top();
        assert!(below.len() == 2);
        assert!(pile.len() == 1);
        assert!(pile.top() == Some(Card::from(2u8)));
    }
}
