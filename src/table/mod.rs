//! Table engine and round state management.

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::error::{DesignateError, JoinError};
use crate::options::TableOptions;
use crate::participant::{Participant, ParticipantId};

mod actions;
mod bet;
mod dealer;
pub mod state;
pub mod view;

pub use dealer::DEALER_STANDS_ON;
pub use state::{GameState, Round};
pub use view::{RoundView, SeatView};

/// A blackjack table with one dealer and any number of players up to
/// [`TableOptions::max_participants`].
///
/// The table owns the participants and the current [`Round`]. All mutation
/// goes through its methods, each of which checks the [`GameState`] first so
/// out-of-order calls are rejected without touching chips, hands, or the deck.
pub struct Table {
    /// Table options.
    pub options: TableOptions,
    /// Current phase of the round.
    pub state: Mutex<GameState>,
    /// Participants in seat order; a participant's ID is its index.
    pub participants: Mutex<Vec<Participant>>,
    /// Seat of the dealer.
    dealer: Mutex<Option<ParticipantId>>,
    /// Deck, bet queue, and turn order of the current round.
    pub round: Mutex<Round>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Table {
    /// Creates an empty table with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{GameState, Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 7);
    /// assert_eq!(table.state(), GameState::WaitingForPlayers);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self {
            options,
            state: Mutex::new(GameState::WaitingForPlayers),
            participants: Mutex::new(Vec::new()),
            dealer: Mutex::new(None),
            round: Mutex::new(Round::default()),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Seats a new participant with the configured starting chips.
    ///
    /// # Errors
    ///
    /// See [`Table::join_with_chips`].
    pub fn join(&self, name: &str) -> Result<ParticipantId, JoinError> {
        self.join_with_chips(name, self.options.starting_chips)
    }

    /// Seats a new participant with `chips` and returns its ID.
    ///
    /// Names are trimmed and must be unique at the table.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, the name is empty or
    /// already taken, or the table is full.
    pub fn join_with_chips(&self, name: &str, chips: usize) -> Result<ParticipantId, JoinError> {
        let state = self.state.lock();
        if state.in_round() {
            return Err(JoinError::InvalidState);
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(JoinError::EmptyName);
        }

        let mut participants = self.participants.lock();
        if participants.iter().any(|p| p.name() == name) {
            return Err(JoinError::DuplicateName);
        }

        let id = ParticipantId::try_from(participants.len()).map_err(|_| JoinError::TableFull)?;
        if id >= self.options.max_participants {
            return Err(JoinError::TableFull);
        }

        participants.push(Participant::new(id, String::from(name), chips));
        drop(participants);
        drop(state);

        log::debug!("participant {id} joined as {name:?} with {chips} chips");
        Ok(id)
    }

    /// Makes `id` the dealer, replacing any previous dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress or the participant does
    /// not exist.
    pub fn designate_dealer(&self, id: ParticipantId) -> Result<(), DesignateError> {
        let state = self.state.lock();
        if state.in_round() {
            return Err(DesignateError::InvalidState);
        }

        if usize::from(id) >= self.participants.lock().len() {
            return Err(DesignateError::ParticipantNotFound);
        }

        *self.dealer.lock() = Some(id);
        drop(state);

        log::debug!("participant {id} is now the dealer");
        Ok(())
    }

    /// Returns the dealer's ID.
    pub fn dealer(&self) -> Option<ParticipantId> {
        *self.dealer.lock()
    }

    /// Returns the number of seated participants.
    pub fn participant_count(&self) -> usize {
        self.participants.lock().len()
    }

    /// Returns a copy of the participant.
    pub fn participant(&self, id: ParticipantId) -> Option<Participant> {
        self.participants.lock().get(usize::from(id)).cloned()
    }

    /// Returns the participant's chips not currently staked.
    pub fn chips(&self, id: ParticipantId) -> Option<usize> {
        self.participants
            .lock()
            .get(usize::from(id))
            .map(Participant::chips)
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the participant whose bet is awaited.
    pub fn awaiting_bet(&self) -> Option<ParticipantId> {
        if *self.state.lock() != GameState::Betting {
            return None;
        }
        self.round.lock().awaiting_bet()
    }

    /// Returns the participant whose turn it is.
    ///
    /// Returns `None` outside of player turns.
    pub fn current_player(&self) -> Option<ParticipantId> {
        if *self.state.lock() != GameState::PlayerTurns {
            return None;
        }
        self.round.lock().current_player()
    }

    /// Returns the number of cards remaining in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.round.lock().deck.len()
    }

    /// Returns the non-dealer participants who still have chips, in seat
    /// order.
    pub fn contenders(&self) -> Vec<ParticipantId> {
        let dealer = *self.dealer.lock();
        self.participants
            .lock()
            .iter()
            .filter(|p| Some(p.id()) != dealer && p.chips() > 0)
            .map(Participant::id)
            .collect()
    }

    /// Returns whether at most one player can still afford a bet.
    pub fn is_game_over(&self) -> bool {
        self.contenders().len() <= 1
    }

    /// Returns a snapshot of the table.
    pub fn view(&self) -> RoundView {
        let state = *self.state.lock();
        let dealer = *self.dealer.lock();
        let participants = self.participants.lock();
        let round = self.round.lock();

        let mut dealer_seat = None;
        let mut seats = Vec::with_capacity(participants.len());
        for participant in participants.iter() {
            if Some(participant.id()) == dealer {
                dealer_seat = Some(SeatView::from(participant));
            } else {
                seats.push(SeatView::from(participant));
            }
        }

        RoundView {
            state,
            dealer: dealer_seat,
            seats,
            current_turn: (state == GameState::PlayerTurns)
                .then(|| round.current_player())
                .flatten(),
            awaiting_bet: (state == GameState::Betting)
                .then(|| round.awaiting_bet())
                .flatten(),
            cards_remaining: round.deck.len(),
        }
    }
}
