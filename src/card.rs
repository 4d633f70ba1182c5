//! Card types and deck constants.

use core::fmt;

/// Card suit.
///
/// Suits are labels only; blackjack scoring never looks at them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spade,
    /// Hearts.
    Heart,
    /// Clubs.
    Club,
    /// Diamonds.
    Diamond,
}

impl Suit {
    /// All suits in canonical shoe order.
    pub const ALL: [Self; 4] = [Self::Spade, Self::Heart, Self::Club, Self::Diamond];

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Spade => '♠',
            Self::Heart => '♥',
            Self::Club => '♣',
            Self::Diamond => '♦',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The face of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub face: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the face. Values outside 1..=13
    /// are accepted but score as their face value.
    #[must_use]
    pub const fn new(suit: Suit, face: u8) -> Self {
        Self { suit, face }
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.face == 1
    }

    /// Short label for the face (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn face_label(&self) -> &'static str {
        match self.face {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.face_label())
    }
}

/// Number of cards in a shoe.
pub const DECK_SIZE: usize = 52;

/// The target total.
pub const BLACKJACK: u16 = 21;

/// Default total at which the dealer stops drawing.
pub const DEALER_STAND_SCORE: u16 = 17;
