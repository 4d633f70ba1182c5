//! Round engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::RoundError;
use crate::hand::{DealerHand, Hand};
use crate::options::GameOptions;
use crate::result::{Outcome, Reason, RoundResult, Winner};
use crate::shoe::Shoe;

mod actions;
mod dealer;
pub mod state;

pub use state::{RoundState, TableView};

/// A single-table blackjack round: one player against the dealer.
///
/// The round owns the shoe, both hands, and the outcome. Calling
/// [`Round::start`] again after settlement rebuilds all of it, so one
/// `Round` value can be reused for every round of a session.
#[derive(Debug, Clone)]
pub struct Round {
    /// Table options.
    pub options: GameOptions,
    /// Cards for the current round.
    shoe: Shoe,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: DealerHand,
    /// Current round state.
    state: RoundState,
    /// Winner and reason once settled.
    outcome: Option<Outcome>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Round {
    /// Creates an idle round with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{GameOptions, Round, RoundState};
    ///
    /// let mut round = Round::new(GameOptions::default(), 42);
    /// assert_eq!(round.state(), RoundState::Waiting);
    /// round.start().unwrap();
    /// assert_eq!(round.player_hand().len(), 2);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            shoe: Shoe::new(),
            player: Hand::new(),
            dealer: DealerHand::new(),
            state: RoundState::Waiting,
            outcome: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Starts a new round from a freshly built and shuffled shoe.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::ExhaustedShoe`] if the configured shoe is too
    /// short for the initial deal.
    pub fn start(&mut self) -> Result<(), RoundError> {
        let mut shoe = Shoe::new();
        shoe.shuffle(&mut self.rng);
        shoe.truncate(self.options.shoe_size);
        self.start_with(shoe)
    }

    /// Starts a new round dealing from `shoe` as given, without shuffling.
    ///
    /// Hands and outcome are reset, two cards go to each side in the order
    /// player, dealer (hole), player, dealer (up), and a blackjack on either
    /// side settles the round at once.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::ExhaustedShoe`] if `shoe` holds fewer than four
    /// cards. The round is then left in [`RoundState::Dealing`] until the
    /// next start.
    pub fn start_with(&mut self, shoe: Shoe) -> Result<(), RoundError> {
        self.shoe = shoe;
        self.player.clear();
        self.dealer.clear();
        self.outcome = None;
        self.state = RoundState::Dealing;
        log::debug!("new round, {} cards in shoe", self.shoe.remaining());

        for _ in 0..2 {
            let card = self.draw()?;
            self.player.add_card(card);
            log::debug!("{} draws {card}", self.options.player_name);

            let card = self.draw()?;
            self.dealer.add_card(card);
            log::debug!("{} draws a card", self.options.dealer_name);
        }

        if self.player.is_blackjack() || self.dealer.hand().is_blackjack() {
            self.settle_blackjack();
        } else {
            self.state = RoundState::PlayerTurn;
        }

        Ok(())
    }

    /// Draws a card from the shoe.
    fn draw(&mut self) -> Result<Card, RoundError> {
        Ok(self.shoe.deal()?)
    }

    /// Fixes the outcome and ends the round.
    fn settle(&mut self, winner: Winner, reason: Reason) {
        self.dealer.reveal_hole();
        self.outcome = Some(Outcome::new(winner, reason));
        self.state = RoundState::Settled;
        log::info!("round settled: {winner:?} by {reason:?}");
    }

    fn settle_blackjack(&mut self) {
        let winner = match (self.player.is_blackjack(), self.dealer.hand().is_blackjack()) {
            (true, true) => Winner::Push,
            (false, true) => Winner::Dealer,
            _ => Winner::Player,
        };
        self.settle(winner, Reason::Blackjack);
    }

    /// Rejects actions once the round is settled or before it has started.
    fn ensure_in_play(&self) -> Result<(), RoundError> {
        match self.state {
            RoundState::PlayerTurn | RoundState::DealerTurn => Ok(()),
            _ => Err(RoundError::InvalidRoundState),
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns whether the round has settled.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state == RoundState::Settled
    }

    /// Returns the outcome, or `None` while undetermined.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Returns the winner, or `None` while undetermined.
    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        self.outcome.map(|o| o.winner)
    }

    /// Returns the settlement reason, or `None` while undetermined.
    #[must_use]
    pub fn reason(&self) -> Option<Reason> {
        self.outcome.map(|o| o.reason)
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the shoe for the current round.
    #[must_use]
    pub const fn shoe(&self) -> &Shoe {
        &self.shoe
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Returns a snapshot of the table as the presenter may show it.
    #[must_use]
    pub fn view(&self) -> TableView<'_> {
        TableView {
            state: self.state,
            player_name: &self.options.player_name,
            player_hand: &self.player,
            dealer_name: &self.options.dealer_name,
            dealer_cards: self.dealer.visible_cards(),
            dealer_totals: self
                .dealer
                .is_hole_revealed()
                .then(|| self.dealer.hand().totals()),
            outcome: self.outcome,
        }
    }

    /// Returns the full result once the round has settled.
    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        let outcome = self.outcome?;
        Some(RoundResult {
            outcome,
            player_name: self.options.player_name.clone(),
            dealer_name: self.options.dealer_name.clone(),
            player_hand: self.player.clone(),
            dealer_hand: self.dealer.hand().clone(),
            player_score: self.player.best_score().ok(),
            dealer_score: self.dealer.hand().best_score().ok(),
        })
    }
}
