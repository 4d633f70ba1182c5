//! Round state types.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::hand::{CardView, Hand};
use crate::result::Outcome;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// No round has been started yet.
    Waiting,
    /// Initial cards are being dealt.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Player has stood; the dealer plays out their hand.
    DealerTurn,
    /// Round has ended and the outcome is fixed.
    Settled,
}

/// Snapshot of the table for a presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView<'a> {
    /// Current round state.
    pub state: RoundState,
    /// The player's name.
    pub player_name: &'a str,
    /// The player's hand. Every player card is face up.
    pub player_hand: &'a Hand,
    /// The dealer's name.
    pub dealer_name: &'a str,
    /// The dealer's cards, hole card hidden until revealed.
    pub dealer_cards: Vec<CardView>,
    /// The dealer's totals, only once the hole card is revealed.
    pub dealer_totals: Option<&'a BTreeSet<u16>>,
    /// The outcome, once settled.
    pub outcome: Option<Outcome>,
}
