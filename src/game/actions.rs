use crate::card::Card;
use crate::error::RoundError;
use crate::result::{Reason, Winner};

use super::{Round, RoundState};

impl Round {
    /// Player action: Hit (draw a card).
    ///
    /// A bust settles the round for the dealer immediately.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidRoundState`] if the round is not in the
    /// player's turn (not started, settled, or the player already stood),
    /// or [`RoundError::ExhaustedShoe`] if the shoe is empty.
    pub fn player_hit(&mut self) -> Result<Card, RoundError> {
        if self.state != RoundState::PlayerTurn || self.player.is_standing() {
            return Err(RoundError::InvalidRoundState);
        }

        let card = self.draw()?;
        self.player.add_card(card);
        log::debug!("{} draws {card}", self.options.player_name);

        if self.player.is_bust() {
            self.settle(Winner::Dealer, Reason::Bust);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Ends the player's turn; the caller then runs [`Round::dealer_play`].
    /// Standing again while already standing is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidRoundState`] if the round is not in play.
    pub fn player_stand(&mut self) -> Result<(), RoundError> {
        self.ensure_in_play()?;

        if !self.player.is_standing() {
            self.player.stand();
            log::debug!(
                "{} stands on {:?}",
                self.options.player_name,
                self.player.best_score()
            );
        }
        self.state = RoundState::DealerTurn;

        Ok(())
    }
}
