use super::action::Target;
use super::settlement::Settlement;
use crate::cards::Card;

/// Push events produced by applying an action. The room fans these out
/// after every mutation, on top of the per-viewer snapshot it always
/// rebuilds. Private events carry real card values and must only ever
/// reach their audience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Free-peek reveal, private to the peeking seat.
    PeekResult {
        seat: usize,
        index: usize,
        card: Card,
    },
    /// Drawn card reveal, private to the turn player. The opponent
    /// never learns the drawn card through any event.
    DrawResult { seat: usize, card: Card, power: bool },
    /// Power peek reveal, private to the caller. For opponent peeks the
    /// opponent is not told which of their slots was seen.
    PowerReveal {
        seat: usize,
        target: Target,
        index: usize,
        card: Card,
    },
    /// King preview of both nominated slots, private to the caller.
    KingPreview {
        seat: usize,
        own: usize,
        opponent: usize,
        own_card: Card,
        opponent_card: Card,
    },
    /// A power card landed on center; its player may still use it.
    CenterPower { seat: usize, card: Card },
    /// Failed burn. Public by design: the wrong guess costs the burner
    /// by revealing the nominated card to both players.
    BurnReveal {
        owner: usize,
        index: usize,
        card: Card,
    },
    /// Round over, full reveal, scores fixed.
    Ended(Settlement),
}

impl Event {
    /// The single seat this event is addressed to, or None to broadcast.
    pub fn audience(&self) -> Option<usize> {
        match self {
            Event::PeekResult { seat, .. } => Some(*seat),
            Event::DrawResult { seat, .. } => Some(*seat),
            Event::PowerReveal { seat, .. } => Some(*seat),
            Event::KingPreview { seat, .. } => Some(*seat),
            Event::CenterPower { seat, .. } => Some(*seat),
            Event::BurnReveal { .. } => None,
            Event::Ended(_) => None,
        }
    }
}
