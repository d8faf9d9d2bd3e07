use super::RoomId;
use super::RoomHandle;
use crate::dto::Ack;
use crate::dto::Request;
use crate::gameplay::GameError;
use crate::gameplay::Rules;
use crate::gameroom::Command;
use rand::Rng;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;
use tokio::sync::oneshot;

/// Manages active game rooms and their lifecycles.
pub struct Lobby {
    rooms: RwLock<HashMap<RoomId, RoomHandle>>,
    rules: Rules,
}

impl Lobby {
    pub fn new(rules: Rules) -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
            rules,
        }
    }

    /// Opens a new room under a fresh join code.
    pub async fn open(&self) -> anyhow::Result<RoomId> {
        let mut rooms = self.rooms.write().await;
        let id = loop {
            let id = Self::code();
            if !rooms.contains_key(&id) {
                break id;
            }
        };
        rooms.insert(id.clone(), RoomHandle::spawn(id.clone(), self.rules));
        log::info!("opened room {}", id);
        Ok(id)
    }

    /// Closes a room: removes it from the lobby and stops its task, so
    /// already-connected clients drain out rather than play on.
    pub async fn close(&self, id: &str) -> anyhow::Result<()> {
        self.rooms
            .write()
            .await
            .remove(id)
            .map(|handle| {
                let _ = handle.commands.send(Command::Close);
                log::info!("closed room {}", id);
            })
            .ok_or(GameError::RoomNotFound)
            .map_err(anyhow::Error::from)
    }

    /// Gets the command endpoint for a room.
    pub async fn commands(&self, id: &str) -> anyhow::Result<UnboundedSender<Command>> {
        self.rooms
            .read()
            .await
            .get(id)
            .map(|handle| handle.commands.clone())
            .ok_or(GameError::RoomNotFound)
            .map_err(anyhow::Error::from)
    }

    /// Spawns the WebSocket bridge between a client connection and a
    /// room's command queue. The first frame must be a `room:hello`
    /// binding the connection to a seat; after that, frames become Act
    /// commands whose acks are written straight back, while room
    /// pushes stream out through the session.
    pub async fn bridge(
        &self,
        id: RoomId,
        mut session: actix_ws::Session,
        mut stream: actix_ws::MessageStream,
    ) -> anyhow::Result<()> {
        use futures::StreamExt;
        let commands = self.commands(&id).await?;
        log::info!("client connecting to room {}", id);
        actix_web::rt::spawn(async move {
            let hello = loop {
                match stream.next().await {
                    Some(Ok(actix_ws::Message::Text(text))) => break text.to_string(),
                    Some(Ok(actix_ws::Message::Close(_))) | Some(Err(_)) | None => return,
                    _ => continue,
                }
            };
            let (name, resume) = match serde_json::from_str::<Request>(&hello) {
                Ok(Request::Hello { name, session }) => (name, session),
                _ => {
                    let _ = session.text(Ack::error("expected room:hello").json()).await;
                    let _ = session.close(None).await;
                    return;
                }
            };
            let (outbox, mut inbox) = unbounded_channel::<String>();
            let (tx, rx) = oneshot::channel();
            let join = Command::Join {
                name,
                session: resume,
                outbox,
                ack: tx,
            };
            if commands.send(join).is_err() {
                return;
            }
            let token = match rx.await {
                Ok(Ok(token)) => token,
                Ok(Err(e)) => {
                    let _ = session.text(Ack::error(e).json()).await;
                    let _ = session.close(None).await;
                    return;
                }
                Err(_) => return,
            };
            if session.text(Ack::session(token).json()).await.is_err() {
                let _ = commands.send(Command::Leave { session: token });
                return;
            }
            'sesh: loop {
                tokio::select! {
                    biased;
                    msg = inbox.recv() => match msg {
                        Some(json) => if session.text(json).await.is_err() { break 'sesh },
                        None => break 'sesh,
                    },
                    msg = stream.next() => match msg {
                        Some(Ok(actix_ws::Message::Text(text))) => {
                            let ack = match serde_json::from_str::<Request>(&text) {
                                Ok(request) => {
                                    let (tx, rx) = oneshot::channel();
                                    let act = Command::Act { session: token, request, ack: tx };
                                    if commands.send(act).is_err() { break 'sesh }
                                    rx.await.unwrap_or_else(|_| Ack::error("room closed"))
                                }
                                Err(e) => Ack::error(e),
                            };
                            if session.text(ack.json()).await.is_err() { break 'sesh }
                        }
                        Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                        Some(Err(_)) => break 'sesh,
                        None => break 'sesh,
                        _ => continue 'sesh,
                    },
                }
            }
            let _ = commands.send(Command::Leave { session: token });
        });
        Ok(())
    }

    fn code() -> RoomId {
        let ref mut rng = rand::rng();
        (0..4)
            .map(|_| char::from(rng.random_range(b'A'..=b'Z')))
            .collect()
    }
}
