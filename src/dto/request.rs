use crate::gameplay::Action;
use crate::gameplay::Context;
use crate::gameplay::Play;
use crate::gameplay::Source;
use crate::gameplay::Target;
use crate::gameroom::SessionId;
use serde::Deserialize;

/// Incoming wire messages, one variant per socket event the browser
/// client emits. The historical protocol grew `power:*` and
/// `centerPower:*` prefixes for the same resolver logic; both map onto
/// the one context-parametrized [`Action::Power`].
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// First frame on every connection: binds it to a seat, or
    /// re-binds a known session after a reconnect.
    #[serde(rename = "room:hello")]
    Hello {
        name: String,
        #[serde(default)]
        session: Option<SessionId>,
    },
    #[serde(rename = "game:start")]
    Start,
    #[serde(rename = "room:bypass")]
    Bypass,
    #[serde(rename = "game:peek")]
    Peek { index: usize },
    #[serde(rename = "turn:take")]
    Take { source: SourceDto },
    #[serde(rename = "turn:swap", rename_all = "camelCase")]
    Swap { hand_index: usize },
    #[serde(rename = "turn:discardDrawn")]
    DiscardDrawn,
    #[serde(rename = "turn:cabo")]
    Cabo,
    #[serde(rename = "power:peekOwn", rename_all = "camelCase")]
    PeekOwn { hand_index: usize },
    #[serde(rename = "power:peekOpp", rename_all = "camelCase")]
    PeekOpp { opp_index: usize },
    #[serde(rename = "power:jackSkip")]
    JackSkip,
    #[serde(rename = "power:queenUnseenSwap", rename_all = "camelCase")]
    QueenSwap { my_index: usize, opp_index: usize },
    #[serde(rename = "power:kingPreview", rename_all = "camelCase")]
    KingPreview { my_index: usize, opp_index: usize },
    #[serde(rename = "power:kingConfirm")]
    KingConfirm { confirm: bool },
    #[serde(rename = "centerPower:peekOwn", rename_all = "camelCase")]
    CenterPeekOwn { hand_index: usize },
    #[serde(rename = "centerPower:peekOpp", rename_all = "camelCase")]
    CenterPeekOpp { opp_index: usize },
    #[serde(rename = "centerPower:jackSkip")]
    CenterJackSkip,
    #[serde(rename = "centerPower:queenUnseenSwap", rename_all = "camelCase")]
    CenterQueenSwap { my_index: usize, opp_index: usize },
    #[serde(rename = "centerPower:kingPreview", rename_all = "camelCase")]
    CenterKingPreview { my_index: usize, opp_index: usize },
    #[serde(rename = "centerPower:kingConfirm")]
    CenterKingConfirm { confirm: bool },
    #[serde(rename = "centerPower:skip")]
    CenterSkip,
    #[serde(rename = "burn:attempt", rename_all = "camelCase")]
    Burn {
        target: TargetDto,
        index: usize,
        #[serde(default)]
        give_index: Option<usize>,
    },
}

impl Request {
    /// Engine action for this request, or None for connection-level
    /// messages the room never sees.
    pub fn action(&self) -> Option<Action> {
        match *self {
            Request::Hello { .. } => None,
            Request::Start => Some(Action::Start),
            Request::Bypass => Some(Action::Bypass),
            Request::Peek { index } => Some(Action::Peek(index)),
            Request::Take { source } => Some(Action::Take(source.into())),
            Request::Swap { hand_index } => Some(Action::Swap(hand_index)),
            Request::DiscardDrawn => Some(Action::Discard),
            Request::Cabo => Some(Action::Cabo),
            Request::PeekOwn { hand_index } => Some(Self::power(Context::Drawn, Play::PeekOwn(hand_index))),
            Request::PeekOpp { opp_index } => Some(Self::power(Context::Drawn, Play::PeekOpponent(opp_index))),
            Request::JackSkip => Some(Self::power(Context::Drawn, Play::Skip)),
            Request::QueenSwap { my_index, opp_index } => Some(Self::power(
                Context::Drawn,
                Play::BlindSwap { own: my_index, opponent: opp_index },
            )),
            Request::KingPreview { my_index, opp_index } => Some(Self::power(
                Context::Drawn,
                Play::Preview { own: my_index, opponent: opp_index },
            )),
            Request::CenterPeekOwn { hand_index } => Some(Self::power(Context::Center, Play::PeekOwn(hand_index))),
            Request::CenterPeekOpp { opp_index } => Some(Self::power(Context::Center, Play::PeekOpponent(opp_index))),
            Request::CenterJackSkip => Some(Self::power(Context::Center, Play::Skip)),
            Request::CenterQueenSwap { my_index, opp_index } => Some(Self::power(
                Context::Center,
                Play::BlindSwap { own: my_index, opponent: opp_index },
            )),
            Request::CenterKingPreview { my_index, opp_index } => Some(Self::power(
                Context::Center,
                Play::Preview { own: my_index, opponent: opp_index },
            )),
            Request::KingConfirm { confirm } => Some(Action::Confirm(confirm)),
            Request::CenterKingConfirm { confirm } => Some(Action::Confirm(confirm)),
            Request::CenterSkip => Some(Action::Pass),
            Request::Burn { target, index, give_index } => Some(Action::Burn {
                target: target.into(),
                index,
                give: give_index,
            }),
        }
    }

    fn power(context: Context, play: Play) -> Action {
        Action::Power { context, play }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceDto {
    Draw,
    Center,
}

impl From<SourceDto> for Source {
    fn from(source: SourceDto) -> Self {
        match source {
            SourceDto::Draw => Source::Draw,
            SourceDto::Center => Source::Center,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub enum TargetDto {
    #[serde(rename = "self")]
    Own,
    #[serde(rename = "opp")]
    Opponent,
}

impl From<TargetDto> for Target {
    fn from(target: TargetDto) -> Self {
        match target {
            TargetDto::Own => Target::Own,
            TargetDto::Opponent => Target::Opponent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_swap() {
        let request = serde_json::from_str::<Request>(r#"{"type":"turn:swap","handIndex":2}"#)
            .expect("valid request");
        assert!(request.action() == Some(Action::Swap(2)));
    }

    #[test]
    fn parses_burn_without_give() {
        let request =
            serde_json::from_str::<Request>(r#"{"type":"burn:attempt","target":"self","index":1}"#)
                .expect("valid request");
        assert!(
            request.action()
                == Some(Action::Burn {
                    target: Target::Own,
                    index: 1,
                    give: None
                })
        );
    }

    #[test]
    fn both_prefixes_reach_one_resolver() {
        let drawn = serde_json::from_str::<Request>(r#"{"type":"power:jackSkip"}"#).unwrap();
        let center = serde_json::from_str::<Request>(r#"{"type":"centerPower:jackSkip"}"#).unwrap();
        assert!(drawn.action() == Some(Action::Power { context: Context::Drawn, play: Play::Skip }));
        assert!(center.action() == Some(Action::Power { context: Context::Center, play: Play::Skip }));
    }
}
