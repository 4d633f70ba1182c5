use core::cmp::Ordering;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::RoundError;
use crate::result::{Reason, Winner};

use super::{Round, RoundState};

impl Round {
    /// Dealer plays their hand.
    ///
    /// The dealer reveals the hole card and draws while their lowest total is
    /// below [`GameOptions::dealer_stands_on`](crate::GameOptions). A bust
    /// settles the round for the player; otherwise the best scores are
    /// compared. If the player had not stood yet, their turn ends here.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidRoundState`] if the round is not in play,
    /// or [`RoundError::ExhaustedShoe`] if the shoe is empty while the dealer
    /// must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, RoundError> {
        self.ensure_in_play()?;

        self.player.stand();
        self.state = RoundState::DealerTurn;
        self.dealer.reveal_hole();

        let mut drawn_cards = Vec::new();

        while self.dealer.hand().min_total() < self.options.dealer_stands_on {
            let card = self.draw()?;
            self.dealer.add_card(card);
            drawn_cards.push(card);
            log::debug!("{} draws {card}", self.options.dealer_name);

            if self.dealer.hand().is_bust() {
                self.settle(Winner::Player, Reason::Bust);
                return Ok(drawn_cards);
            }
        }

        self.settle_compare()?;

        Ok(drawn_cards)
    }

    /// Settles by comparing best scores; equal scores push.
    fn settle_compare(&mut self) -> Result<(), RoundError> {
        let player_score = self.player.best_score()?;
        let dealer_score = self.dealer.hand().best_score()?;

        let winner = match player_score.cmp(&dealer_score) {
            Ordering::Greater => Winner::Player,
            Ordering::Less => Winner::Dealer,
            Ordering::Equal => Winner::Push,
        };
        self.settle(winner, Reason::Compare);

        Ok(())
    }
}
