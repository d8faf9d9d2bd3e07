use crate::gameplay::Rules;
use crate::gameroom::Command;
use crate::gameroom::Room;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

/// Four-letter join code, shareable by link.
pub type RoomId = String;

/// Handle to a running room's serializer task. Bridges hold their own
/// sender clones, so stopping the task takes an explicit
/// [`Command::Close`], not just dropping this handle.
pub struct RoomHandle {
    pub id: RoomId,
    pub commands: UnboundedSender<Command>,
}

impl RoomHandle {
    /// Spawns the room task and keeps its command endpoint.
    pub fn spawn(id: RoomId, rules: Rules) -> Self {
        let (tx, rx) = unbounded_channel();
        let room = Room::new(id.clone(), rules, rx);
        tokio::spawn(room.run());
        Self { id, commands: tx }
    }
}
