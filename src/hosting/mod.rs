mod handle;
mod lobby;
mod server;

pub use handle::*;
pub use lobby::*;
pub use server::*;
