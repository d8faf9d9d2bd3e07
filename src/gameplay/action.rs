#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Host deals a fresh round.
    Start,
    /// Host collapses the peek phase early. Operational escape hatch.
    Bypass,
    /// Spend one free peek on an own slot.
    Peek(usize),
    /// Take a card from the nominated source into the drawn slot.
    Take(Source),
    /// Place the drawn card into a hand slot, old card to center.
    Swap(usize),
    /// Send the drawn card straight to center.
    Discard,
    /// End the round after one final opposing turn.
    Cabo,
    /// Resolve a power from either calling context. One resolver,
    /// context-parametrized, instead of one per wire prefix.
    Power { context: Context, play: Play },
    /// Commit or decline the pending king preview.
    Confirm(bool),
    /// Decline a center power.
    Pass,
    /// First-claim-wins attempt against the center top card.
    Burn {
        target: Target,
        index: usize,
        give: Option<usize>,
    },
}

/// Where the card being taken comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Draw,
    Center,
}

/// Whose hand an index points into, relative to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Own,
    Opponent,
}

/// Which lifecycle the power card is in when its power is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    Drawn,
    Center,
}

/// Concrete power invocation with its indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Play {
    PeekOwn(usize),
    PeekOpponent(usize),
    Skip,
    BlindSwap { own: usize, opponent: usize },
    Preview { own: usize, opponent: usize },
}

impl Play {
    /// The power this invocation claims to exercise.
    pub fn power(&self) -> Power {
        match self {
            Play::PeekOwn(_) => Power::PeekOwn,
            Play::PeekOpponent(_) => Power::PeekOpponent,
            Play::Skip => Power::Skip,
            Play::BlindSwap { .. } => Power::BlindSwap,
            Play::Preview { .. } => Power::SeenSwap,
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Action::Start => write!(f, "{}", "START".white()),
            Action::Bypass => write!(f, "{}", "BYPASS".white()),
            Action::Peek(i) => write!(f, "{}", format!("PEEK    #{}", i).cyan()),
            Action::Take(_) => write!(f, "{}", "TAKE".yellow()),
            Action::Swap(i) => write!(f, "{}", format!("SWAP    #{}", i).green()),
            Action::Discard => write!(f, "{}", "DISCARD".yellow()),
            Action::Cabo => write!(f, "{}", "CABO".magenta()),
            Action::Power { play, .. } => write!(f, "{}", format!("POWER   {:?}", play).blue()),
            Action::Confirm(c) => write!(f, "{}", format!("CONFIRM {}", c).blue()),
            Action::Pass => write!(f, "{}", "PASS".white()),
            Action::Burn { target, index, .. } => {
                write!(f, "{}", format!("BURN    {:?} #{}", target, index).red())
            }
        }
    }
}

use super::power::Power;
use colored::*;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
