//! Round outcome types.

use core::fmt;

use alloc::string::String;

use crate::hand::Hand;

/// Who won the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The player wins.
    Player,
    /// The dealer wins.
    Dealer,
    /// Tie; nobody wins.
    Push,
}

/// Why the round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// One or both sides were dealt a blackjack.
    Blackjack,
    /// One side went over 21.
    Bust,
    /// Both sides stood and best scores were compared.
    Compare,
}

/// The settled result of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outcome {
    /// The winning side.
    pub winner: Winner,
    /// The rule that decided the round.
    pub reason: Reason,
}

impl Outcome {
    /// Creates a new outcome.
    #[must_use]
    pub const fn new(winner: Winner, reason: Reason) -> Self {
        Self { winner, reason }
    }

    /// Returns a settlement message naming both participants.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Outcome, Reason, Winner};
    ///
    /// let outcome = Outcome::new(Winner::Dealer, Reason::Bust);
    /// assert_eq!(
    ///     outcome.announce("Player1", "Dealer").to_string(),
    ///     "Player1 busts! Dealer wins!"
    /// );
    /// ```
    #[must_use]
    pub const fn announce<'a>(&self, player: &'a str, dealer: &'a str) -> Announcement<'a> {
        Announcement {
            outcome: *self,
            player,
            dealer,
        }
    }
}

/// Displayable settlement message, see [`Outcome::announce`].
#[derive(Debug, Clone, Copy)]
pub struct Announcement<'a> {
    outcome: Outcome,
    player: &'a str,
    dealer: &'a str,
}

impl fmt::Display for Announcement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (player, dealer) = (self.player, self.dealer);
        match (self.outcome.reason, self.outcome.winner) {
            (Reason::Blackjack, Winner::Player) => {
                write!(f, "{player} has blackjack! {player} wins!")
            }
            (Reason::Blackjack, Winner::Dealer) => {
                write!(f, "{dealer} has blackjack! {dealer} wins!")
            }
            (Reason::Blackjack, Winner::Push) => {
                write!(f, "{dealer} and {player} have blackjack! Push!")
            }
            (Reason::Bust, Winner::Dealer) => write!(f, "{player} busts! {dealer} wins!"),
            (Reason::Bust, _) => write!(f, "{dealer} busts! {player} wins!"),
            (Reason::Compare, Winner::Player) => {
                write!(f, "{player} has a larger hand! {player} wins!")
            }
            (Reason::Compare, Winner::Dealer) => {
                write!(f, "{dealer} has a larger hand! {dealer} wins!")
            }
            (Reason::Compare, Winner::Push) => {
                write!(f, "{dealer} and {player} have the same hand value! Push!")
            }
        }
    }
}

/// Everything a presenter needs once a round has settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Winner and reason.
    pub outcome: Outcome,
    /// The player's name.
    pub player_name: String,
    /// The dealer's name.
    pub dealer_name: String,
    /// The player's full hand.
    pub player_hand: Hand,
    /// The dealer's full hand, hole card included.
    pub dealer_hand: Hand,
    /// The player's best legal score (`None` if bust).
    pub player_score: Option<u16>,
    /// The dealer's best legal score (`None` if bust).
    pub dealer_score: Option<u16>,
}

impl RoundResult {
    /// Returns the settlement message for this result.
    #[must_use]
    pub fn announcement(&self) -> Announcement<'_> {
        self.outcome.announce(&self.player_name, &self.dealer_name)
    }
}
