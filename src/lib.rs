//! A multiplayer, single-dealer blackjack round engine with optional `no_std`
//! support.
//!
//! The crate provides a [`Table`] type that owns the participants and drives
//! one round at a time through betting, dealing, player turns, dealer play,
//! and settlement. Presentation and the decision to start another round are
//! left to the caller.
//!
//! # Example
//!
//! ```
//! use bjtable::{GameState, Table, TableOptions};
//!
//! let table = Table::new(TableOptions::default(), 42);
//! let dealer = table.join("Dana").unwrap();
//! let player = table.join("Pat").unwrap();
//! table.designate_dealer(dealer).unwrap();
//!
//! table.start_round().unwrap();
//! table.submit_bet(player, 50).unwrap();
//! table.deal_initial_hands().unwrap();
//!
//! while table.state() == GameState::PlayerTurns {
//!     table.stand(player).unwrap();
//! }
//!
//! let result = table.settle().unwrap();
//! assert_eq!(result.players.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
pub mod settlement;
pub mod table;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, BetError, DealError, DesignateError, EmptyDeckError, JoinError, SettleError,
    StartError,
};
pub use hand::Hand;
pub use options::{RoundingMode, TableOptions};
pub use participant::{Participant, ParticipantId};
pub use result::{HandOutcome, PlayerResult, RoundResult};
pub use table::{GameState, Round, RoundView, SeatView, Table};
