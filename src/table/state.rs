//! Round phase and per-round bookkeeping.

use alloc::vec::Vec;

use crate::deck::Deck;
use crate::participant::ParticipantId;

/// Phase of the table's current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No round has been played yet; participants may join.
    WaitingForPlayers,
    /// Waiting for bets, one participant at a time.
    Betting,
    /// All bets are in; initial hands can be dealt.
    Dealing,
    /// Waiting for the current player to hit or stand.
    PlayerTurns,
    /// Every player is done; the dealer plays out their hand.
    DealerTurn,
    /// Hands are final and can be settled.
    Settlement,
    /// The round has been settled. A new round may start.
    Complete,
}

impl GameState {
    /// Returns whether a round is running (between start and settlement).
    #[must_use]
    pub const fn in_round(self) -> bool {
        !matches!(self, Self::WaitingForPlayers | Self::Complete)
    }
}

/// State that lives for exactly one round: the deck, the betting queue, and
/// the turn order.
#[derive(Debug, Clone, Default)]
pub struct Round {
    /// The deck for this round.
    pub deck: Deck,
    bet_order: Vec<ParticipantId>,
    next_bet: usize,
    turn_order: Vec<ParticipantId>,
    turn: usize,
}

impl Round {
    /// Creates a round that will take bets from `bet_order`, in order.
    #[must_use]
    pub const fn new(deck: Deck, bet_order: Vec<ParticipantId>) -> Self {
        Self {
            deck,
            bet_order,
            next_bet: 0,
            turn_order: Vec::new(),
            turn: 0,
        }
    }

    /// Returns the participant whose bet is awaited.
    #[must_use]
    pub fn awaiting_bet(&self) -> Option<ParticipantId> {
        self.bet_order.get(self.next_bet).copied()
    }

    pub(crate) const fn bet_received(&mut self) {
        self.next_bet += 1;
    }

    /// Returns the fixed turn order computed after dealing.
    #[must_use]
    pub fn turn_order(&self) -> &[ParticipantId] {
        &self.turn_order
    }

    pub(crate) fn set_turn_order(&mut self, order: Vec<ParticipantId>) {
        self.turn_order = order;
        self.turn = 0;
    }

    /// Returns the participant whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<ParticipantId> {
        self.turn_order.get(self.turn).copied()
    }

    /// Moves the turn to the next player. Returns `false` once every player
    /// has finished.
    pub(crate) fn advance_turn(&mut self) -> bool {
        if self.turn < self.turn_order.len() {
            self.turn += 1;
        }
        self.turn < self.turn_order.len()
    }
}
