use alloc::vec::Vec;

use crate::deck::Deck;
use crate::error::{BetError, DealError, StartError};
use crate::participant::{Participant, ParticipantId};

use super::{GameState, Round, RoundView, Table};

impl Table {
    /// Starts a new round.
    ///
    /// Hands and bets are cleared, a fresh deck is shuffled, and the table
    /// waits for bets from every non-dealer with chips, in seat order. If
    /// nobody can bet, the round goes straight to [`GameState::Dealing`].
    ///
    /// # Errors
    ///
    /// Returns an error if a round is already running, no dealer is
    /// designated, or nobody besides the dealer is seated.
    pub fn start_round(&self) -> Result<RoundView, StartError> {
        let mut state = self.state.lock();
        if state.in_round() {
            return Err(StartError::InvalidState);
        }

        let dealer = (*self.dealer.lock()).ok_or(StartError::NoDealer)?;

        let mut participants = self.participants.lock();
        if !participants.iter().any(|p| p.id() != dealer) {
            return Err(StartError::NoPlayers);
        }

        for participant in participants.iter_mut() {
            participant.reset_for_round();
        }

        let bet_order: Vec<ParticipantId> = participants
            .iter()
            .filter(|p| p.id() != dealer && p.chips() > 0)
            .map(Participant::id)
            .collect();
        drop(participants);

        let mut deck = Deck::new();
        deck.shuffle(&mut *self.rng.lock());

        let awaiting = bet_order.len();
        *self.round.lock() = Round::new(deck, bet_order);

        *state = if awaiting == 0 {
            GameState::Dealing
        } else {
            GameState::Betting
        };
        drop(state);

        log::info!("round started, awaiting {awaiting} bet(s)");
        Ok(self.view())
    }

    /// Places the bet of the participant the table is waiting on.
    ///
    /// The amount is clamped to the participant's chips and deducted
    /// immediately. A bet of zero keeps the participant out of this round.
    /// Returns the amount actually staked.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not taking bets, the participant
    /// does not exist, or it is not this participant's turn to bet.
    pub fn submit_bet(&self, id: ParticipantId, amount: usize) -> Result<usize, BetError> {
        let mut state = self.state.lock();
        if *state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        let mut participants = self.participants.lock();
        let participant = participants
            .get_mut(usize::from(id))
            .ok_or(BetError::ParticipantNotFound)?;

        let mut round = self.round.lock();
        if round.awaiting_bet() != Some(id) {
            return Err(BetError::NotAwaitingBet);
        }

        let staked = participant.place_bet(amount);
        round.bet_received();
        drop(participants);

        log::debug!("participant {id} bet {staked} (asked {amount})");

        if round.awaiting_bet().is_none() {
            *state = GameState::Dealing;
            log::debug!("all bets received");
        }

        Ok(staked)
    }

    /// Deals the initial hands.
    ///
    /// The first pass gives one card to every participant in seat order,
    /// dealer included. The second pass gives one more card to every
    /// participant except the dealer, who draws the rest of their hand
    /// during [`GameState::DealerTurn`].
    ///
    /// Turn order is then fixed as the non-dealers with a positive bet, in
    /// seat order. If nobody bet, the round moves straight to
    /// [`GameState::Settlement`].
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not ready to deal or the deck holds
    /// too few cards for both passes.
    pub fn deal_initial_hands(&self) -> Result<RoundView, DealError> {
        let mut state = self.state.lock();
        if *state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        let Some(dealer) = *self.dealer.lock() else {
            return Err(DealError::InvalidState);
        };

        let mut participants = self.participants.lock();
        let mut round = self.round.lock();

        let cards_needed = participants.len() * 2 - 1;
        if round.deck.len() < cards_needed {
            return Err(DealError::EmptyDeck);
        }

        for participant in participants.iter_mut() {
            let card = round.deck.draw()?;
            participant.hand_mut().add_card(card);
        }

        for participant in participants.iter_mut().filter(|p| p.id() != dealer) {
            let card = round.deck.draw()?;
            participant.hand_mut().add_card(card);
        }

        let turn_order: Vec<ParticipantId> = participants
            .iter()
            .filter(|p| p.id() != dealer && p.bet() > 0)
            .map(Participant::id)
            .collect();
        drop(participants);

        let players = turn_order.len();
        round.set_turn_order(turn_order);
        drop(round);

        *state = if players == 0 {
            GameState::Settlement
        } else {
            GameState::PlayerTurns
        };
        drop(state);

        log::debug!("initial hands dealt, {players} player(s) in turn order");
        Ok(self.view())
    }
}
