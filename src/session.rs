//! Session loop: plays rounds until the player quits.
//!
//! Input collection and rendering stay outside the engine. A front end
//! implements [`InputCollector`] and [`Presenter`]; [`Session::run`] only
//! sequences round operations between them.

use crate::error::RoundError;
use crate::game::{Round, TableView};
use crate::options::GameOptions;
use crate::result::{RoundResult, Winner};

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

/// A decision after a round settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// Play another round.
    Continue,
    /// End the session.
    Quit,
}

/// Supplies normalized player decisions.
///
/// Parsing and re-prompting on bad input belong to the implementor.
pub trait InputCollector {
    /// Asks for hit or stand during the player's turn.
    fn player_action(&mut self, view: &TableView<'_>) -> PlayerAction;

    /// Asks whether to play another round.
    fn play_again(&mut self, result: &RoundResult) -> Continuation;
}

/// Renders table state and results.
pub trait Presenter {
    /// Called after every state change with what the table may see.
    fn show_table(&mut self, view: &TableView<'_>);

    /// Called once per round after settlement.
    fn show_result(&mut self, result: &RoundResult);
}

/// Running tally of settled rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Rounds played to settlement.
    pub rounds: usize,
    /// Rounds won by the player.
    pub player_wins: usize,
    /// Rounds won by the dealer.
    pub dealer_wins: usize,
    /// Tied rounds.
    pub pushes: usize,
}

impl SessionStats {
    fn record(&mut self, winner: Winner) {
        self.rounds += 1;
        match winner {
            Winner::Player => self.player_wins += 1,
            Winner::Dealer => self.dealer_wins += 1,
            Winner::Push => self.pushes += 1,
        }
    }
}

/// Owns the round and plays it repeatedly.
#[derive(Debug, Clone)]
pub struct Session {
    round: Round,
    stats: SessionStats,
}

impl Session {
    /// Creates a session with the given options and seed.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            round: Round::new(options, seed),
            stats: SessionStats::default(),
        }
    }

    /// Returns the round being played.
    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the tally so far.
    #[must_use]
    pub const fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Plays one round to settlement.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::ExhaustedShoe`] if the configured shoe runs out.
    pub fn play_round<I, P>(
        &mut self,
        input: &mut I,
        presenter: &mut P,
    ) -> Result<RoundResult, RoundError>
    where
        I: InputCollector + ?Sized,
        P: Presenter + ?Sized,
    {
        self.round.start()?;
        presenter.show_table(&self.round.view());

        while !self.round.is_over() && !self.round.player_hand().is_standing() {
            match input.player_action(&self.round.view()) {
                PlayerAction::Hit => {
                    self.round.player_hit()?;
                }
                PlayerAction::Stand => self.round.player_stand()?,
            }
            presenter.show_table(&self.round.view());
        }

        if !self.round.is_over() {
            self.round.dealer_play()?;
            presenter.show_table(&self.round.view());
        }

        let result = self.round.result().ok_or(RoundError::InvalidRoundState)?;
        self.stats.record(result.outcome.winner);
        presenter.show_result(&result);

        Ok(result)
    }

    /// Plays rounds until the collector answers [`Continuation::Quit`].
    ///
    /// Returns the final tally.
    ///
    /// # Errors
    ///
    /// Stops at the first round error, see [`Session::play_round`].
    pub fn run<I, P>(&mut self, input: &mut I, presenter: &mut P) -> Result<SessionStats, RoundError>
    where
        I: InputCollector + ?Sized,
        P: Presenter + ?Sized,
    {
        loop {
            let result = self.play_round(input, presenter)?;
            if input.play_again(&result) == Continuation::Quit {
                log::info!("session over after {} rounds", self.stats.rounds);
                return Ok(self.stats);
            }
        }
    }
}
