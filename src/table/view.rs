//! Read-only snapshots of the table for presentation layers.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::participant::{Participant, ParticipantId};

use super::GameState;

/// One participant as seen from the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatView {
    /// The participant ID.
    pub id: ParticipantId,
    /// The participant's name.
    pub name: String,
    /// Cards in hand, in the order dealt.
    pub cards: Vec<Card>,
    /// Best hand value.
    pub value: u8,
    /// Whether the hand is a natural.
    pub natural: bool,
    /// Whether the hand is bust.
    pub bust: bool,
    /// Bet for this round.
    pub bet: usize,
    /// Chips not currently staked.
    pub chips: usize,
}

impl From<&Participant> for SeatView {
    fn from(participant: &Participant) -> Self {
        let hand = participant.hand();
        Self {
            id: participant.id(),
            name: participant.name().into(),
            cards: hand.cards().to_vec(),
            value: hand.value(),
            natural: hand.is_natural(),
            bust: hand.is_bust(),
            bet: participant.bet(),
            chips: participant.chips(),
        }
    }
}

/// Snapshot of the round. The dealer's cards are all face up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    /// Current phase.
    pub state: GameState,
    /// The dealer, if one is designated.
    pub dealer: Option<SeatView>,
    /// Every other participant, in seat order.
    pub seats: Vec<SeatView>,
    /// Whose turn it is during player turns.
    pub current_turn: Option<ParticipantId>,
    /// Whose bet is awaited during betting.
    pub awaiting_bet: Option<ParticipantId>,
    /// Cards left in the deck.
    pub cards_remaining: usize,
}

impl RoundView {
    /// Returns the seat of a non-dealer participant.
    #[must_use]
    pub fn seat(&self, id: ParticipantId) -> Option<&SeatView> {
        self.seats.iter().find(|seat| seat.id == id)
    }

    /// Returns the seats that hold a bet this round.
    pub fn active_seats(&self) -> impl Iterator<Item = &SeatView> {
        self.seats.iter().filter(|seat| seat.bet > 0)
    }
}
