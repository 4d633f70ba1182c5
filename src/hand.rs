//! Player and dealer hand representations.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::card::{BLACKJACK, Card};
use crate::error::ScoreError;

/// Computes every distinct total the cards can make.
///
/// Each ace independently counts as 1 or 11, so a hand with `n` aces yields
/// up to `n + 1` totals. Busting totals stay in the set alongside legal ones.
///
/// # Example
///
/// ```
/// use bjtable::{Card, Suit, hand::score_totals};
///
/// let totals = score_totals(&[Card::new(Suit::Spade, 1), Card::new(Suit::Heart, 1)]);
/// assert_eq!(totals.into_iter().collect::<Vec<_>>(), vec![2, 12, 22]);
/// ```
#[must_use]
pub fn score_totals(cards: &[Card]) -> BTreeSet<u16> {
    let mut totals = BTreeSet::from([0_u16]);

    for card in cards {
        totals = match card.face {
            1 => totals.iter().flat_map(|&t| [t + 1, t + 11]).collect(),
            10..=13 => totals.iter().map(|&t| t + 10).collect(),
            face => totals.iter().map(|&t| t + u16::from(face)).collect(),
        };
    }

    totals
}

/// An ordered set of cards with its candidate totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Every total the cards can make.
    totals: BTreeSet<u16>,
    /// Whether the owner has stood.
    standing: bool,
}

impl Hand {
    /// Creates a new empty hand. Its only total is 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            totals: BTreeSet::from([0]),
            standing: false,
        }
    }

    /// Adds a card to the hand and recomputes its totals.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.totals = score_totals(&self.cards);
        log::trace!("hand {:?} totals {:?}", self.cards, self.totals);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns every candidate total in ascending order.
    #[must_use]
    pub const fn totals(&self) -> &BTreeSet<u16> {
        &self.totals
    }

    /// Returns the lowest total (every ace counted as 1).
    #[must_use]
    pub fn min_total(&self) -> u16 {
        self.totals.first().copied().unwrap_or(0)
    }

    /// Returns the highest total, which may be over 21.
    #[must_use]
    pub fn max_total(&self) -> u16 {
        self.totals.last().copied().unwrap_or(0)
    }

    /// Returns whether even the lowest total is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.min_total() > BLACKJACK
    }

    /// Returns whether the hand is exactly two cards whose highest total is 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.max_total() == BLACKJACK
    }

    /// Returns the highest total at or below 21.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::EmptyScoreSet`] if the hand is bust.
    pub fn best_score(&self) -> Result<u16, ScoreError> {
        self.totals
            .range(..=BLACKJACK)
            .next_back()
            .copied()
            .ok_or(ScoreError::EmptyScoreSet)
    }

    /// Returns whether the owner has stood.
    #[must_use]
    pub const fn is_standing(&self) -> bool {
        self.standing
    }

    /// Marks the hand as standing.
    pub const fn stand(&mut self) {
        self.standing = true;
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.totals = BTreeSet::from([0]);
        self.standing = false;
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

/// The dealer's hand.
///
/// The first card dealt is the hole card and stays hidden from
/// [`DealerHand::visible_cards`] until [`DealerHand::reveal_hole`] is called.
/// Hiding affects display only, never scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerHand {
    hand: Hand,
    hole_revealed: bool,
}

/// A card as shown to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardView {
    /// Face-up card.
    Up(Card),
    /// Face-down hole card.
    Hidden,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hand: Hand::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Returns the underlying hand, including the hole card.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Returns the hole card (first card).
    #[must_use]
    pub fn hole_card(&self) -> Option<&Card> {
        self.hand.cards().first()
    }

    /// Returns the up card (second card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().get(1)
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Returns the cards as the table sees them.
    #[must_use]
    pub fn visible_cards(&self) -> Vec<CardView> {
        self.hand
            .cards()
            .iter()
            .enumerate()
            .map(|(index, &card)| {
                if index == 0 && !self.hole_revealed {
                    CardView::Hidden
                } else {
                    CardView::Up(card)
                }
            })
            .collect()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hand.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.hand.clear();
        self.hole_revealed = false;
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
