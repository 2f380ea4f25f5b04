//! Error types for table operations.
//!
//! Every operation that returns one of these errors leaves chips, hands, the
//! deck, and the round phase exactly as they were.

use thiserror::Error;

/// The deck ran out of cards.
///
/// A 52-card deck with at most seven participants should never run dry, so
/// this is fatal for the round in which it occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that can occur when joining the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// A round is in progress.
    #[error("cannot join while a round is in progress")]
    InvalidState,
    /// The name is empty after trimming.
    #[error("name is empty")]
    EmptyName,
    /// Another participant already uses this name.
    #[error("name is already taken")]
    DuplicateName,
    /// The table has no free seats.
    #[error("table is full")]
    TableFull,
}

/// Errors that can occur when designating the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DesignateError {
    /// A round is in progress.
    #[error("cannot change the dealer while a round is in progress")]
    InvalidState,
    /// Participant not found.
    #[error("participant not found")]
    ParticipantNotFound,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// A round is already in progress.
    #[error("a round is already in progress")]
    InvalidState,
    /// No dealer has been designated.
    #[error("no dealer has been designated")]
    NoDealer,
    /// There is no participant besides the dealer.
    #[error("at least one player besides the dealer is required")]
    NoPlayers,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Participant not found.
    #[error("participant not found")]
    ParticipantNotFound,
    /// The table is not waiting for a bet from this participant.
    #[error("not waiting for a bet from this participant")]
    NotAwaitingBet,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    EmptyDeck,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Player turns are not in progress.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this participant's turn.
    #[error("not this participant's turn")]
    NotYourTurn,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur during dealer play and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettleError {
    /// Invalid game state for settlement.
    #[error("invalid game state for settlement")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<EmptyDeckError> for DealError {
    fn from(_: EmptyDeckError) -> Self {
        Self::EmptyDeck
    }
}

impl From<EmptyDeckError> for ActionError {
    fn from(_: EmptyDeckError) -> Self {
        Self::EmptyDeck
    }
}

impl From<EmptyDeckError> for SettleError {
    fn from(_: EmptyDeckError) -> Self {
        Self::EmptyDeck
    }
}
