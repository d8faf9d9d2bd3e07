use super::phase::Phase;
use crate::Score;
use crate::cards::Rank;
use thiserror::Error;

/// Everything here is recoverable: the offending action is rejected
/// with a reason, room state is left untouched, and the room keeps
/// accepting actions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("not your turn")]
    NotYourTurn,
    #[error("action not legal in phase {0}")]
    WrongPhase(Phase),
    #[error("hand index {0} is out of range")]
    InvalidIndex(usize),
    #[error("no peeks left")]
    NoPeeksLeft,
    #[error("hand total must be {0} or less to call cabo")]
    CaboNotEligible(Score),
    #[error("{0} has no usable power")]
    NoPowerAvailable(Rank),
    #[error("resolve the pending king preview first")]
    PendingConfirmationExists,
    #[error("no king preview is pending")]
    NoPendingConfirmation,
    #[error("a previewed card moved; confirm refused, decline to resolve")]
    StalePreview,
    #[error("no drawn card to act on")]
    NoDrawnCard,
    #[error("an opponent burn requires a card to give")]
    MissingGive,
    #[error("taking from the center pile was retired; play the center power instead")]
    CenterRetired,
    #[error("center pile is empty")]
    EmptyCenter,
    #[error("draw pile is empty")]
    EmptyDraw,
    #[error("room is full")]
    RoomFull,
    #[error("room not found")]
    RoomNotFound,
    #[error("only the host may do that")]
    NotHost,
    #[error("waiting for a second player")]
    NotEnoughPlayers,
    #[error("unknown session")]
    UnknownSession,
}
