mod card;
mod deck;
mod pile;
mod rank;
mod suit;

pub use card::*;
pub use deck::*;
pub use pile::*;
pub use rank::*;
pub use suit::*;
