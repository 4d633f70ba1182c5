//! Game configuration options.

use alloc::string::String;

use crate::card::{DEALER_STAND_SCORE, DECK_SIZE};

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjtable::GameOptions;
///
/// let options = GameOptions::default()
///     .with_player_name("Alice")
///     .with_dealer_stands_on(17);
/// assert_eq!(options.player_name, "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Name shown for the player.
    pub player_name: String,
    /// Name shown for the dealer.
    pub dealer_name: String,
    /// The dealer draws while its lowest total is below this value.
    pub dealer_stands_on: u16,
    /// Number of cards kept in the shoe after shuffling (at most 52).
    pub shoe_size: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            player_name: String::from("Player1"),
            dealer_name: String::from("Dealer"),
            dealer_stands_on: DEALER_STAND_SCORE,
            shoe_size: DECK_SIZE,
        }
    }
}

impl GameOptions {
    /// Sets the player's name.
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Sets the dealer's name.
    #[must_use]
    pub fn with_dealer_name(mut self, name: impl Into<String>) -> Self {
        self.dealer_name = name.into();
        self
    }

    /// Sets the total at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u16) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets how many cards the shoe keeps after shuffling.
    ///
    /// Sizes above 52 are clamped. A short shoe can run out mid-round.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_shoe_size(60);
    /// assert_eq!(options.shoe_size, 52);
    /// ```
    #[must_use]
    pub const fn with_shoe_size(mut self, size: usize) -> Self {
        self.shoe_size = if size > DECK_SIZE { DECK_SIZE } else { size };
        self
    }
}
