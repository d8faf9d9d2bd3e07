use super::command::Command;
use super::command::SessionId;
use crate::dto::Ack;
use crate::dto::Push;
use crate::dto::Request;
use crate::dto::Snapshot;
use crate::gameplay::Event;
use crate::gameplay::Game;
use crate::gameplay::Rules;
use std::collections::HashMap;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;

/// Central coordinator for one live Kabo room.
///
/// Owns the authoritative Game and applies commands one at a time off
/// a single queue, which gives every room a strict total order over
/// actions: at most one in-flight mutation, simultaneous burns settled
/// by arrival, no interleaving with phase transitions.
///
/// After each applied action the room fans out the action's own push
/// events (respecting their audience) and then a fresh per-viewer
/// snapshot to every connected seat.
#[derive(Debug)]
pub struct Room {
    id: String,
    game: Game,
    sessions: HashMap<SessionId, usize>,
    outboxes: Vec<Option<UnboundedSender<String>>>,
    commands: UnboundedReceiver<Command>,
}

impl Room {
    pub fn new(id: String, rules: Rules, commands: UnboundedReceiver<Command>) -> Self {
        Self {
            id,
            game: Game::new(rules),
            sessions: HashMap::new(),
            outboxes: Vec::new(),
            commands,
        }
    }

    /// Serializer loop. Runs until the lobby drops the command sender.
    pub async fn run(mut self) {
        while let Some(command) = self.commands.recv().await {
            match command {
                Command::Join {
                    name,
                    session,
                    outbox,
                    ack,
                } => self.join(name, session, outbox, ack),
                Command::Act {
                    session,
                    request,
                    ack,
                } => self.act(session, request, ack),
                Command::Leave { session } => self.leave(session),
                Command::Close => break,
            }
        }
        log::info!("room {} serializer stopped", self.id);
    }
}

impl Room {
    fn join(
        &mut self,
        name: String,
        session: Option<SessionId>,
        outbox: UnboundedSender<String>,
        ack: tokio::sync::oneshot::Sender<Result<SessionId, crate::gameplay::GameError>>,
    ) {
        let known = session.and_then(|s| self.sessions.get(&s).map(|seat| (s, *seat)));
        let result = match known {
            Some((session, seat)) => {
                self.outboxes[seat] = Some(outbox);
                log::info!("room {}: seat {} reconnected", self.id, seat);
                Ok(session)
            }
            None => match self.game.join(name) {
                Ok(seat) => {
                    let session = rand::random::<SessionId>();
                    self.sessions.insert(session, seat);
                    self.outboxes.push(Some(outbox));
                    log::info!("room {}: seat {} joined", self.id, seat);
                    Ok(session)
                }
                Err(e) => Err(e),
            },
        };
        let joined = result.is_ok();
        let _ = ack.send(result);
        if joined {
            self.refresh();
        }
    }

    fn act(
        &mut self,
        session: SessionId,
        request: Request,
        ack: tokio::sync::oneshot::Sender<Ack>,
    ) {
        let Some(seat) = self.sessions.get(&session).copied() else {
            let _ = ack.send(Ack::error(crate::gameplay::GameError::UnknownSession));
            return;
        };
        let Some(action) = request.action() else {
            let _ = ack.send(Ack::error("unexpected connection-level message"));
            return;
        };
        match self.game.apply(seat, action) {
            Ok(events) => {
                let _ = ack.send(Ack::ok());
                for event in events.iter() {
                    self.dispatch(event);
                }
                self.refresh();
            }
            Err(e) => {
                log::debug!("room {}: seat {} rejected: {}", self.id, seat, e);
                let _ = ack.send(Ack::error(e));
            }
        }
    }

    fn leave(&mut self, session: SessionId) {
        if let Some(seat) = self.sessions.get(&session).copied() {
            self.outboxes[seat] = None;
            log::info!("room {}: seat {} disconnected, room parked", self.id, seat);
        }
    }
}

impl Room {
    /// Route one push event to its audience. Private events carry card
    /// values and are only ever sent to their addressee.
    fn dispatch(&self, event: &Event) {
        let push = Push::from(event);
        match event.audience() {
            Some(seat) => self.unicast(seat, &push),
            None => self.broadcast(&push),
        }
    }

    /// Rebuild and send each connected viewer their own projection.
    fn refresh(&self) {
        for seat in 0..self.outboxes.len() {
            let snapshot = Snapshot::of(&self.game, seat, &self.id);
            self.unicast(seat, &Push::Update(snapshot));
        }
    }

    fn unicast(&self, seat: usize, push: &Push) {
        self.outboxes
            .get(seat)
            .and_then(|outbox| outbox.as_ref())
            .map(|outbox| outbox.send(Self::json(push)))
            .and_then(|res| res.err())
            .inspect(|e| log::warn!("room {}: failed unicast to seat {}: {:?}", self.id, seat, e));
    }

    fn broadcast(&self, push: &Push) {
        for seat in 0..self.outboxes.len() {
            self.unicast(seat, push);
        }
    }

    fn json(push: &Push) -> String {
        serde_json::to_string(push).unwrap_or_else(|e| {
            log::error!("push serialization failed: {}", e);
            r#"{"type":"error"}"#.to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::unbounded_channel;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn close_stops_the_serializer() {
        let (commands, rx) = unbounded_channel();
        tokio::spawn(Room::new("TEST".into(), Rules::default(), rx).run());
        commands.send(Command::Close).unwrap();
        let (ack, rx) = oneshot::channel();
        let _ = commands.send(Command::Act {
            session: 0,
            request: Request::Start,
            ack,
        });
        // the serializer exited on Close, so the ack sender is dropped
        assert!(rx.await.is_err());
    }
}
