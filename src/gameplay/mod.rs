mod action;
mod burn;
mod error;
mod event;
mod game;
mod ledger;
mod phase;
mod power;
mod rules;
mod seat;
mod settlement;

pub use action::*;
pub use error::*;
pub use event::*;
pub use game::*;
pub use ledger::*;
pub use phase::*;
pub use power::*;
pub use rules::*;
pub use seat::*;
pub use settlement::*;
