/// Room lifecycle phases. The phase is the single source of truth for
/// which actions are legal; every dispatch checks it first.
///
/// LOBBY -> PEEK -> TURN_DRAW -> TURN_DECIDE -> (CENTER_POWER)
///       -> TURN_DRAW | LAST_TURN -> ENDED
#[derive(Debug, Default, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Phase {
    #[default]
    Lobby,
    Peek,
    TurnDraw,
    TurnDecide,
    CenterPower,
    LastTurn,
    Ended,
}

impl Phase {
    /// Burns are opportunistic: legal in any phase where turns are
    /// being taken, for either player, regardless of whose turn it is.
    pub fn burnable(&self) -> bool {
        matches!(
            self,
            Phase::TurnDraw | Phase::TurnDecide | Phase::CenterPower | Phase::LastTurn
        )
    }
}

/// Wire names match the browser client verbatim.
impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lobby => write!(f, "LOBBY"),
            Self::Peek => write!(f, "PEEK"),
            Self::TurnDraw => write!(f, "TURN_DRAW"),
            Self::TurnDecide => write!(f, "TURN_DECIDE"),
            Self::CenterPower => write!(f, "CENTER_POWER"),
            Self::LastTurn => write!(f, "LAST_TURN"),
            Self::Ended => write!(f, "ENDED"),
        }
    }
}
