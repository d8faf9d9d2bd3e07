use crate::Score;
use crate::cards::Card;
use crate::gameplay::Event;
use crate::gameplay::Game;
use crate::gameplay::Phase;
use crate::gameplay::Settlement;
use crate::gameplay::Target;
use crate::gameroom::SessionId;
use serde::Serialize;

/// A card on the wire: `{ "r": "10", "s": "H" }`, plus its scoring
/// value once hands are public at round end.
#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub r: String,
    pub s: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<Score>,
}

impl From<Card> for CardView {
    fn from(card: Card) -> Self {
        Self {
            r: card.rank().to_string(),
            s: card.suit().to_string(),
            score: None,
        }
    }
}

impl CardView {
    fn scored(card: Card) -> Self {
        Self {
            score: Some(card.score()),
            ..Self::from(card)
        }
    }
}

/// Per-viewer room snapshot, rebuilt and pushed after every applied
/// action. This is the only projection of hand contents that exists:
/// a slot's real value is serialized only when the ledger says this
/// viewer knows it, or once the round has ended.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub id: String,
    pub started: bool,
    pub phase: String,
    pub players: Vec<SeatView>,
    pub draw_count: usize,
    pub discard_top: Option<CardView>,
    pub turn_seat: usize,
    pub log: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended: Option<EndedView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatView {
    pub name: String,
    pub is_me: bool,
    pub is_host: bool,
    pub hand_count: usize,
    pub peeks_left: u8,
    pub hand: Vec<Option<CardView>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndedView {
    pub winner_name: String,
    pub scores: Vec<ScoreView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreView {
    pub name: String,
    pub score: Score,
}

impl From<&Settlement> for EndedView {
    fn from(settlement: &Settlement) -> Self {
        Self {
            winner_name: settlement.winner.clone(),
            scores: settlement
                .scores
                .iter()
                .map(|(name, score)| ScoreView {
                    name: name.clone(),
                    score: *score,
                })
                .collect(),
        }
    }
}

impl Snapshot {
    pub fn of(game: &Game, viewer: usize, id: &str) -> Self {
        let ended = game.phase() == Phase::Ended;
        Self {
            id: id.to_string(),
            started: game.started(),
            phase: game.phase().to_string(),
            players: game
                .seats()
                .iter()
                .enumerate()
                .map(|(owner, seat)| SeatView {
                    name: seat.name().to_string(),
                    is_me: owner == viewer,
                    is_host: seat.host(),
                    hand_count: seat.hand().len(),
                    peeks_left: seat.peeks(),
                    hand: seat
                        .hand()
                        .iter()
                        .enumerate()
                        .map(|(index, card)| {
                            if ended {
                                Some(CardView::scored(*card))
                            } else if game.ledger().knows(viewer, owner, index) {
                                Some(CardView::from(*card))
                            } else {
                                None
                            }
                        })
                        .collect(),
                })
                .collect(),
            draw_count: game.draw_count(),
            discard_top: game.center_top().map(CardView::from),
            turn_seat: game.turn(),
            log: game.log().to_vec(),
            ended: game.settlement().map(EndedView::from),
        }
    }
}

/// Outgoing push messages, one variant per socket event the client
/// listens for.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Push {
    #[serde(rename = "room:update")]
    Update(Snapshot),
    #[serde(rename = "peek:result")]
    PeekResult { index: usize, card: CardView },
    #[serde(rename = "turn:drawResult")]
    DrawResult { card: CardView, power: bool },
    #[serde(rename = "power:reveal")]
    PowerReveal {
        kind: String,
        index: usize,
        card: CardView,
    },
    #[serde(rename = "king:preview", rename_all = "camelCase")]
    KingPreview {
        my_index: usize,
        opp_index: usize,
        my_card: CardView,
        opp_card: CardView,
    },
    #[serde(rename = "burn:revealWrong")]
    BurnRevealWrong {
        owner: usize,
        index: usize,
        card: CardView,
    },
    #[serde(rename = "center:powerAvailable")]
    CenterPowerAvailable { card: CardView },
    #[serde(rename = "round:ended", rename_all = "camelCase")]
    Ended {
        winner_name: String,
        scores: Vec<ScoreView>,
    },
}

impl From<&Event> for Push {
    fn from(event: &Event) -> Self {
        match event {
            Event::PeekResult { index, card, .. } => Push::PeekResult {
                index: *index,
                card: CardView::from(*card),
            },
            Event::DrawResult { card, power, .. } => Push::DrawResult {
                card: CardView::from(*card),
                power: *power,
            },
            Event::PowerReveal {
                target,
                index,
                card,
                ..
            } => Push::PowerReveal {
                kind: match target {
                    Target::Own => "own".to_string(),
                    Target::Opponent => "opp".to_string(),
                },
                index: *index,
                card: CardView::from(*card),
            },
            Event::KingPreview {
                own,
                opponent,
                own_card,
                opponent_card,
                ..
            } => Push::KingPreview {
                my_index: *own,
                opp_index: *opponent,
                my_card: CardView::from(*own_card),
                opp_card: CardView::from(*opponent_card),
            },
            Event::CenterPower { card, .. } => Push::CenterPowerAvailable {
                card: CardView::from(*card),
            },
            Event::BurnReveal { owner, index, card } => Push::BurnRevealWrong {
                owner: *owner,
                index: *index,
                card: CardView::from(*card),
            },
            Event::Ended(settlement) => {
                let view = EndedView::from(settlement);
                Push::Ended {
                    winner_name: view.winner_name,
                    scores: view.scores,
                }
            }
        }
    }
}

/// Request acknowledgement, the `{ ok, error? }` shape the client's
/// emit callbacks expect.
#[derive(Debug, Clone, Serialize)]
pub struct Ack {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionId>,
}

impl Ack {
    pub fn ok() -> Self {
        Self {
            ok: true,
            error: None,
            session: None,
        }
    }

    pub fn session(session: SessionId) -> Self {
        Self {
            ok: true,
            error: None,
            session: Some(session),
        }
    }

    pub fn error(reason: impl ToString) -> Self {
        Self {
            ok: false,
            error: Some(reason.to_string()),
            session: None,
        }
    }

    pub fn json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| r#"{"ok":false}"#.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;
    use crate::cards::Suit;

    #[test]
    fn card_wire_shape() {
        let card = Card::from((Rank::Ten, Suit::Heart));
        let json = serde_json::to_string(&CardView::from(card)).unwrap();
        assert!(json == r#"{"r":"10","s":"H"}"#);
    }

    #[test]
    fn push_is_tagged_with_event_name() {
        let push = Push::DrawResult {
            card: CardView::from(Card::from((Rank::Seven, Suit::Club))),
            power: true,
        };
        let json = serde_json::to_string(&push).unwrap();
        assert!(json.contains(r#""type":"turn:drawResult""#));
        assert!(json.contains(r#""power":true"#));
    }

    #[test]
    fn ack_error_shape() {
        let json = Ack::error("not your turn").json();
        assert!(json == r#"{"ok":false,"error":"not your turn"}"#);
    }
}
