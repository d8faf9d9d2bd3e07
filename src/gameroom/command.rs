use crate::dto::Ack;
use crate::dto::Request;
use crate::gameplay::GameError;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::oneshot;

/// Per-connection identity token. Issued on first join, presented on
/// reconnect to re-bind the same seat. The engine never infers who is
/// acting from anything but this explicit token.
pub type SessionId = u64;

/// Commands delivered to a room's serializer task. One channel per
/// room, consumed strictly in order: that queue is the whole
/// concurrency story for a room.
#[derive(Debug)]
pub enum Command {
    /// Bind a connection to a seat: a fresh join, or a session re-bind
    /// after a reconnect.
    Join {
        name: String,
        session: Option<SessionId>,
        outbox: UnboundedSender<String>,
        ack: oneshot::Sender<Result<SessionId, GameError>>,
    },
    /// One player request with its acknowledgement slot.
    Act {
        session: SessionId,
        request: Request,
        ack: oneshot::Sender<Ack>,
    },
    /// Connection dropped. The seat stays (the room parks mid-turn if
    /// need be); only the outbox goes.
    Leave { session: SessionId },
    /// Tear the room down. The serializer exits, its outboxes drop,
    /// and every bridge drains out on its next recv.
    Close,
}
