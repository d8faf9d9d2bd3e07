#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
    /// Scoring value at round end. Red kings count -1, everything
    /// else at face value.
    pub fn score(&self) -> Score {
        if self.rank == Rank::King && self.suit.is_red() {
            -1
        } else {
            self.rank.value()
        }
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        u8::from(c.suit) + u8::from(c.rank) * 4
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        Self {
            rank: Rank::from(n / 4),
            suit: Suit::from(n % 4),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

use super::rank::Rank;
use super::suit::Suit;
use crate::Score;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for n in 0..52u8 {
            assert!(n == u8::from(Card::from(n)));
        }
    }

    #[test]
    fn red_kings_negative() {
        assert!(Card::from((Rank::King, Suit::Heart)).score() == -1);
        assert!(Card::from((Rank::King, Suit::Diamond)).score() == -1);
        assert!(Card::from((Rank::King, Suit::Spade)).score() == 13);
        assert!(Card::from((Rank::King, Suit::Club)).score() == 13);
    }
}
