use super::action::Target;
use super::error::GameError;
use super::event::Event;
use super::game::Game;

/// Burn resolution: a first-claim-wins race against the center top
/// card. Burns are opportunistic and never turn-gated; the room task's
/// one-at-a-time dispatch is what serializes simultaneous claims, so
/// the loser of the race is simply evaluated against the winner's
/// resulting center state.
impl Game {
    pub(crate) fn burn(
        &mut self,
        seat: usize,
        target: Target,
        index: usize,
        give: Option<usize>,
    ) -> Result<Vec<Event>, GameError> {
        if !self.phase.burnable() {
            return Err(GameError::WrongPhase(self.phase));
        }
        let top = self.center.top().ok_or(GameError::EmptyCenter)?;
        let owner = match target {
            Target::Own => seat,
            Target::Opponent => self.next(seat),
        };
        let nominated = self.seats[owner].card(index)?;
        // validate the give card up front: it is never consumed on a miss
        let give = match target {
            Target::Own => None,
            Target::Opponent => {
                let give = give.ok_or(GameError::MissingGive)?;
                self.seats[seat].card(give)?;
                Some(give)
            }
        };
        if nominated.rank() != top.rank() {
            self.ledger.publish(owner, index);
            self.note(format!(
                "{} burned wrong, revealing {}'s slot {}",
                self.name(seat),
                self.name(owner),
                index + 1
            ));
            return Ok(vec![Event::BurnReveal {
                owner,
                index,
                card: nominated,
            }]);
        }
        match target {
            Target::Own => {
                let burned = self.seats[seat].remove(index)?;
                self.center.push(burned);
                self.ledger.collapse(seat, index);
                self.note(format!("{} burned {}", self.name(seat), burned));
            }
            Target::Opponent => {
                let give = give.ok_or(GameError::MissingGive)?;
                let given = self.seats[seat].remove(give)?;
                self.ledger.collapse(seat, give);
                let burned = self.seats[owner].replace(index, given)?;
                self.center.push(burned);
                self.ledger.invalidate(owner, index);
                self.note(format!(
                    "{} steal-burned {} from {}",
                    self.name(seat),
                    burned,
                    self.name(owner)
                ));
            }
        }
        Ok(Vec::new())
    }
}
