use crate::error::ActionError;
use crate::participant::ParticipantId;

use super::{GameState, Round, RoundView, Table};

impl Table {
    fn ensure_player_turn(&self, state: GameState, id: ParticipantId) -> Result<(), ActionError> {
        if state != GameState::PlayerTurns {
            return Err(ActionError::InvalidState);
        }

        if self.round.lock().current_player() != Some(id) {
            return Err(ActionError::NotYourTurn);
        }

        Ok(())
    }

    fn advance_after_turn(state: &mut GameState, round: &mut Round) {
        if !round.advance_turn() {
            *state = GameState::DealerTurn;
            log::debug!("player turns finished");
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// A hand that goes over 21 busts and the turn passes to the next
    /// player. A hand at exactly 21 may keep hitting.
    ///
    /// # Errors
    ///
    /// Returns an error if player turns are not in progress, it is not this
    /// participant's turn, or the deck is empty.
    pub fn hit(&self, id: ParticipantId) -> Result<RoundView, ActionError> {
        let mut state = self.state.lock();
        self.ensure_player_turn(*state, id)?;

        let mut participants = self.participants.lock();
        let mut round = self.round.lock();

        let card = round.deck.draw()?;
        let hand = participants[usize::from(id)].hand_mut();
        hand.add_card(card);
        let bust = hand.is_bust();
        let value = hand.value();
        drop(participants);

        log::debug!("participant {id} hits {card}, total {value}");

        if bust {
            log::debug!("participant {id} busts");
            Self::advance_after_turn(&mut *state, &mut *round);
        }
        drop(round);
        drop(state);

        Ok(self.view())
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if player turns are not in progress or it is not
    /// this participant's turn.
    pub fn stand(&self, id: ParticipantId) -> Result<RoundView, ActionError> {
        let mut state = self.state.lock();
        self.ensure_player_turn(*state, id)?;

        log::debug!("participant {id} stands");

        let mut round = self.round.lock();
        Self::advance_after_turn(&mut *state, &mut *round);
        drop(round);
        drop(state);

        Ok(self.view())
    }
}
