mod command;
mod room;

pub use command::*;
pub use room::*;
