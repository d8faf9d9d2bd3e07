use super::action::Action;
use super::action::Context;
use super::action::Play;
use super::action::Source;
use super::action::Target;
use super::error::GameError;
use super::event::Event;
use super::ledger::Ledger;
use super::phase::Phase;
use super::power::Power;
use super::rules::Rules;
use super::seat::Seat;
use super::settlement::Settlement;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Pile;

/// Multi-step flow state that outlives a single action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pending {
    /// A power card was voluntarily played to center; its player may
    /// still use the power or pass.
    Center(Card),
    /// A king preview is outstanding. The caller is locked out of
    /// every other action until they confirm or decline. The shown
    /// cards are kept so a confirm can only ever commit that exact
    /// swap; a burn may move slots underneath a live preview.
    Preview {
        context: Context,
        own: usize,
        opponent: usize,
        own_card: Card,
        opponent_card: Card,
    },
}

/// Authoritative room state and the turn state machine over it.
///
/// All mutation flows through [`Game::apply`], which validates one
/// `(seat, action)` pair against the current phase, mutates, and
/// returns the push events the action produced. The room task applies
/// actions strictly one at a time, so two simultaneous burn attempts
/// resolve in arrival order: the second sees post-first-attempt state.
///
/// The drawn card is exclusively server-owned; clients only ever see
/// it through the private DrawResult event addressed to its holder.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) rules: Rules,
    pub(crate) seats: Vec<Seat>,
    pub(crate) draw: Deck,
    pub(crate) center: Pile,
    pub(crate) ledger: Ledger,
    pub(crate) phase: Phase,
    pub(crate) turn: usize,
    pub(crate) drawn: Option<Card>,
    pub(crate) pending: Option<Pending>,
    pub(crate) skip_next: bool,
    pub(crate) caller: Option<usize>,
    pub(crate) settlement: Option<Settlement>,
    pub(crate) log: Vec<String>,
    pub(crate) stacked: Option<Deck>,
}

impl Game {
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            seats: Vec::new(),
            draw: Deck::default(),
            center: Pile::default(),
            ledger: Ledger::default(),
            phase: Phase::Lobby,
            turn: 0,
            drawn: None,
            pending: None,
            skip_next: false,
            caller: None,
            settlement: None,
            log: Vec::new(),
            stacked: None,
        }
    }

    /// Preset the deck order used by the next Start. Deterministic
    /// rounds for tests and scripted games.
    pub fn stack(&mut self, deck: Deck) {
        self.stacked = Some(deck);
    }

    /// Seat a player. First in is host. Seats are only granted in the
    /// lobby; reconnection re-binds sessions and never calls this.
    pub fn join(&mut self, name: String) -> Result<usize, GameError> {
        if self.seats.len() >= crate::SEATS {
            return Err(GameError::RoomFull);
        }
        let host = self.seats.is_empty();
        self.seats.push(Seat::new(name, host));
        Ok(self.seats.len() - 1)
    }

    /// Apply one validated action for one seat. The single entry point
    /// for every game mutation.
    pub fn apply(&mut self, seat: usize, action: Action) -> Result<Vec<Event>, GameError> {
        if seat >= self.seats.len() {
            return Err(GameError::UnknownSession);
        }
        if let Some(Pending::Preview { .. }) = self.pending {
            if self.turn == seat && !matches!(action, Action::Confirm(_)) {
                return Err(GameError::PendingConfirmationExists);
            }
        }
        log::debug!("seat {} {}", seat, action);
        match action {
            Action::Start => self.start(seat),
            Action::Bypass => self.bypass(seat),
            Action::Peek(index) => self.peek(seat, index),
            Action::Take(source) => self.take(seat, source),
            Action::Swap(index) => self.swap(seat, index),
            Action::Discard => self.discard(seat),
            Action::Cabo => self.cabo(seat),
            Action::Power { context, play } => self.power(seat, context, play),
            Action::Confirm(commit) => self.confirm(seat, commit),
            Action::Pass => self.pass(seat),
            Action::Burn {
                target,
                index,
                give,
            } => self.burn(seat, target, index, give),
        }
    }
}

impl Game {
    fn start(&mut self, seat: usize) -> Result<Vec<Event>, GameError> {
        if !self.seats[seat].host() {
            return Err(GameError::NotHost);
        }
        if self.seats.len() < crate::SEATS {
            return Err(GameError::NotEnoughPlayers);
        }
        match self.phase {
            Phase::Lobby | Phase::Ended => {}
            p => return Err(GameError::WrongPhase(p)),
        }
        let mut deck = self.stacked.take().unwrap_or_else(Deck::shuffled);
        if deck.len() < self.rules.hand_size * self.seats.len() + 1 {
            return Err(GameError::EmptyDraw);
        }
        self.center = Pile::default();
        self.ledger.clear();
        self.log.clear();
        self.drawn = None;
        self.pending = None;
        self.skip_next = false;
        self.caller = None;
        self.settlement = None;
        for position in 0..self.seats.len() {
            let hand = (0..self.rules.hand_size)
                .map_while(|_| deck.draw())
                .collect();
            self.seats[position].deal(hand, self.rules.peeks);
        }
        let flip = deck.draw().ok_or(GameError::EmptyDraw)?;
        self.center.push(flip);
        self.draw = deck;
        self.turn = 0;
        self.phase = Phase::Peek;
        self.note("new round dealt, peek phase begins".to_string());
        Ok(Vec::new())
    }

    fn bypass(&mut self, seat: usize) -> Result<Vec<Event>, GameError> {
        if !self.seats[seat].host() {
            return Err(GameError::NotHost);
        }
        match self.phase {
            Phase::Peek => {}
            p => return Err(GameError::WrongPhase(p)),
        }
        for seat in self.seats.iter_mut() {
            seat.exhaust_peeks();
        }
        self.phase = Phase::TurnDraw;
        self.note("host bypassed the peek phase".to_string());
        Ok(Vec::new())
    }

    /// Peeks are not turn-gated: both players spend them independently
    /// during PEEK, each on their own hand only.
    fn peek(&mut self, seat: usize, index: usize) -> Result<Vec<Event>, GameError> {
        match self.phase {
            Phase::Peek => {}
            p => return Err(GameError::WrongPhase(p)),
        }
        let card = self.seats[seat].card(index)?;
        self.seats[seat].spend_peek()?;
        self.ledger.record(seat, seat, index);
        if self.seats.iter().all(|seat| seat.peeks() == 0) {
            self.phase = Phase::TurnDraw;
            self.note("peeks exhausted, play begins".to_string());
        }
        Ok(vec![Event::PeekResult { seat, index, card }])
    }

    fn take(&mut self, seat: usize, source: Source) -> Result<Vec<Event>, GameError> {
        match self.phase {
            Phase::TurnDraw | Phase::LastTurn => {}
            p => return Err(GameError::WrongPhase(p)),
        }
        if self.turn != seat {
            return Err(GameError::NotYourTurn);
        }
        if let Source::Center = source {
            return Err(GameError::CenterRetired);
        }
        if self.draw.is_empty() {
            let below = self.center.drain_below_top();
            if below.is_empty() {
                return Err(GameError::EmptyDraw);
            }
            self.draw.recycle(below);
            self.note("center pile recycled into a fresh draw pile".to_string());
        }
        let card = self.draw.draw().ok_or(GameError::EmptyDraw)?;
        self.drawn = Some(card);
        self.phase = Phase::TurnDecide;
        self.note(format!("{} drew from the pile", self.name(seat)));
        Ok(vec![Event::DrawResult {
            seat,
            card,
            power: Power::of(card.rank()).is_some(),
        }])
    }

    fn swap(&mut self, seat: usize, index: usize) -> Result<Vec<Event>, GameError> {
        match self.phase {
            Phase::TurnDecide => {}
            p => return Err(GameError::WrongPhase(p)),
        }
        if self.turn != seat {
            return Err(GameError::NotYourTurn);
        }
        let drawn = self.drawn.ok_or(GameError::NoDrawnCard)?;
        let old = self.seats[seat].replace(index, drawn)?;
        self.drawn = None;
        self.center.push(old);
        self.ledger.invalidate(seat, index);
        self.note(format!(
            "{} swapped slot {} and discarded {}",
            self.name(seat),
            index + 1,
            old
        ));
        Ok(self.end_turn())
    }

    fn discard(&mut self, seat: usize) -> Result<Vec<Event>, GameError> {
        match self.phase {
            Phase::TurnDecide => {}
            p => return Err(GameError::WrongPhase(p)),
        }
        if self.turn != seat {
            return Err(GameError::NotYourTurn);
        }
        let card = self.drawn.take().ok_or(GameError::NoDrawnCard)?;
        self.center.push(card);
        self.note(format!("{} played {} to center", self.name(seat), card));
        if Power::of(card.rank()).is_some() {
            self.pending = Some(Pending::Center(card));
            self.phase = Phase::CenterPower;
            Ok(vec![Event::CenterPower { seat, card }])
        } else {
            Ok(self.end_turn())
        }
    }

    /// Eligibility is computed entirely server-side; the client never
    /// sees the hand total, only the pass/fail of the call.
    fn cabo(&mut self, seat: usize) -> Result<Vec<Event>, GameError> {
        match self.phase {
            Phase::TurnDraw => {}
            p => return Err(GameError::WrongPhase(p)),
        }
        if self.turn != seat {
            return Err(GameError::NotYourTurn);
        }
        if self.seats[seat].score() > self.rules.cabo_threshold {
            return Err(GameError::CaboNotEligible(self.rules.cabo_threshold));
        }
        self.caller = Some(seat);
        self.note(format!("{} called CABO", self.name(seat)));
        Ok(self.end_turn())
    }

    fn power(&mut self, seat: usize, context: Context, play: Play) -> Result<Vec<Event>, GameError> {
        if self.turn != seat {
            return Err(GameError::NotYourTurn);
        }
        let card = match context {
            Context::Drawn => match self.phase {
                Phase::TurnDecide => self.drawn.ok_or(GameError::NoDrawnCard)?,
                p => return Err(GameError::WrongPhase(p)),
            },
            Context::Center => match (self.phase, self.pending) {
                (Phase::CenterPower, Some(Pending::Center(card))) => card,
                (p, _) => return Err(GameError::WrongPhase(p)),
            },
        };
        let power = Power::of(card.rank()).ok_or(GameError::NoPowerAvailable(card.rank()))?;
        if power != play.power() {
            return Err(GameError::NoPowerAvailable(card.rank()));
        }
        let rival = self.next(seat);
        match play {
            Play::PeekOwn(index) => {
                let seen = self.seats[seat].card(index)?;
                self.ledger.record(seat, seat, index);
                self.note(format!("{} peeked one of their own cards", self.name(seat)));
                let mut events = vec![Event::PowerReveal {
                    seat,
                    target: Target::Own,
                    index,
                    card: seen,
                }];
                events.extend(self.resolve(context));
                Ok(events)
            }
            Play::PeekOpponent(index) => {
                let seen = self.seats[rival].card(index)?;
                self.ledger.record(seat, rival, index);
                self.note(format!("{} peeked an opponent card", self.name(seat)));
                let mut events = vec![Event::PowerReveal {
                    seat,
                    target: Target::Opponent,
                    index,
                    card: seen,
                }];
                events.extend(self.resolve(context));
                Ok(events)
            }
            Play::Skip => {
                self.skip_next = true;
                self.note(format!(
                    "{} played the jack, next turn is skipped",
                    self.name(seat)
                ));
                Ok(self.resolve(context))
            }
            Play::BlindSwap { own, opponent } => {
                let mine = self.seats[seat].card(own)?;
                let theirs = self.seats[rival].card(opponent)?;
                self.seats[seat].replace(own, theirs)?;
                self.seats[rival].replace(opponent, mine)?;
                self.ledger.invalidate(seat, own);
                self.ledger.invalidate(rival, opponent);
                self.note(format!("{} swapped blind with the queen", self.name(seat)));
                Ok(self.resolve(context))
            }
            Play::Preview { own, opponent } => {
                let own_card = self.seats[seat].card(own)?;
                let opponent_card = self.seats[rival].card(opponent)?;
                self.pending = Some(Pending::Preview {
                    context,
                    own,
                    opponent,
                    own_card,
                    opponent_card,
                });
                Ok(vec![Event::KingPreview {
                    seat,
                    own,
                    opponent,
                    own_card,
                    opponent_card,
                }])
            }
        }
    }

    /// Commit or decline the pending king preview. Declining is a
    /// terminal, non-erroring resolution: no hand or ledger mutation,
    /// but the king is spent and the turn ends.
    fn confirm(&mut self, seat: usize, commit: bool) -> Result<Vec<Event>, GameError> {
        let Some(Pending::Preview {
            context,
            own,
            opponent,
            own_card,
            opponent_card,
        }) = self.pending
        else {
            return Err(GameError::NoPendingConfirmation);
        };
        if self.turn != seat {
            return Err(GameError::NotYourTurn);
        }
        if commit {
            let rival = self.next(seat);
            // a burn can shift slots under a live preview; only the
            // exact previewed swap may ever be committed
            if self.seats[seat].card(own)? != own_card
                || self.seats[rival].card(opponent)? != opponent_card
            {
                return Err(GameError::StalePreview);
            }
            self.seats[seat].replace(own, opponent_card)?;
            self.seats[rival].replace(opponent, own_card)?;
            self.ledger.invalidate(seat, own);
            self.ledger.invalidate(rival, opponent);
            self.note(format!("{} swapped with the king", self.name(seat)));
        }
        self.pending = None;
        Ok(self.resolve(context))
    }

    fn pass(&mut self, seat: usize) -> Result<Vec<Event>, GameError> {
        if self.turn != seat {
            return Err(GameError::NotYourTurn);
        }
        match (self.phase, self.pending) {
            (Phase::CenterPower, Some(Pending::Center(_))) => {}
            (p, _) => return Err(GameError::WrongPhase(p)),
        }
        self.note(format!("{} passed on the center power", self.name(seat)));
        Ok(self.resolve(Context::Center))
    }
}

impl Game {
    /// A used power terminates the card's lifecycle exactly as a plain
    /// discard would, then the turn ends.
    fn resolve(&mut self, context: Context) -> Vec<Event> {
        match context {
            Context::Drawn => {
                if let Some(card) = self.drawn.take() {
                    self.center.push(card);
                }
            }
            Context::Center => {
                self.pending = None;
            }
        }
        self.end_turn()
    }

    /// Advance turn ownership: honor a pending cabo call (single final
    /// opposing turn, then settle) and the jack's skip, which with two
    /// players hands the turn straight back.
    pub(crate) fn end_turn(&mut self) -> Vec<Event> {
        if let Some(caller) = self.caller {
            if self.turn != caller {
                return self.settle();
            }
            self.turn = self.next(self.turn);
            self.phase = Phase::LastTurn;
            self.note(format!("{} takes the last turn", self.name(self.turn)));
            return Vec::new();
        }
        if self.skip_next {
            self.skip_next = false;
            self.note(format!("{} was skipped", self.name(self.next(self.turn))));
        } else {
            self.turn = self.next(self.turn);
        }
        self.phase = Phase::TurnDraw;
        Vec::new()
    }

    /// Reveal, score, fix the record. Knowledge is moot once every
    /// slot is public, so the ledger is wiped here.
    pub(crate) fn settle(&mut self) -> Vec<Event> {
        self.phase = Phase::Ended;
        self.pending = None;
        let settlement = Settlement::from((self.seats.as_slice(), self.caller));
        self.note(format!("round over, {} wins", settlement.winner));
        self.settlement = Some(settlement.clone());
        self.ledger.clear();
        vec![Event::Ended(settlement)]
    }

    pub(crate) fn next(&self, seat: usize) -> usize {
        (seat + 1) % self.seats.len()
    }

    pub(crate) fn name(&self, seat: usize) -> String {
        self.seats
            .get(seat)
            .map(|seat| seat.name().to_string())
            .unwrap_or_default()
    }

    pub(crate) fn note(&mut self, line: String) {
        log::info!("{}", line);
        self.log.push(line);
        if self.log.len() > Self::LOG_LINES {
            self.log.remove(0);
        }
    }

    const LOG_LINES: usize = 50;
}

impl Game {
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn turn(&self) -> usize {
        self.turn
    }
    pub fn started(&self) -> bool {
        self.phase != Phase::Lobby
    }
    pub fn drawn(&self) -> Option<Card> {
        self.drawn
    }
    pub fn draw_count(&self) -> usize {
        self.draw.len()
    }
    pub fn center_top(&self) -> Option<Card> {
        self.center.top()
    }
    pub fn log(&self) -> &[String] {
        &self.log
    }
    pub fn settlement(&self) -> Option<&Settlement> {
        self.settlement.as_ref()
    }

    /// Every card the room currently accounts for. The multiset union
    /// of draw pile, center pile, both hands, and the drawn card must
    /// always be the full 52-card set once a round is dealt.
    pub fn census(&self) -> Vec<Card> {
        self.draw
            .cards()
            .chain(self.center.cards())
            .chain(self.seats.iter().flat_map(|seat| seat.hand().iter()))
            .copied()
            .chain(self.drawn)
            .collect()
    }
}
