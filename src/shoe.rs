//! The shoe of cards dealt during a round.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::DealError;

/// An ordered sequence of cards plus a cursor pointing at the next undealt card.
///
/// Dealing never removes cards; it only advances the cursor, so a card is
/// handed out at most once until the shoe is shuffled again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Card>,
    cursor: usize,
}

impl Shoe {
    /// Creates a full 52-card shoe in canonical order.
    #[must_use]
    pub fn new() -> Self {
        let mut shoe = Self {
            cards: Vec::with_capacity(DECK_SIZE),
            cursor: 0,
        };
        shoe.build();
        shoe
    }

    /// Creates a shoe that deals the given cards in order.
    ///
    /// The cards are not validated, so tests can arrange exact draws or
    /// shortened shoes.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Card, Shoe, Suit};
    ///
    /// let mut shoe = Shoe::from_cards(vec![Card::new(Suit::Heart, 1)]);
    /// assert_eq!(shoe.deal().unwrap(), Card::new(Suit::Heart, 1));
    /// assert!(shoe.deal().is_err());
    /// ```
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards, cursor: 0 }
    }

    /// Repopulates every suit and face combination in canonical order and
    /// rewinds the cursor.
    pub fn build(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for face in 1..=13 {
                self.cards.push(Card::new(suit, face));
            }
        }
        self.cursor = 0;
    }

    /// Shuffles the whole shoe in place and rewinds the cursor.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        self.cursor = 0;
    }

    /// Keeps only the first `len` cards.
    pub fn truncate(&mut self, len: usize) {
        self.cards.truncate(len);
        self.cursor = self.cursor.min(self.cards.len());
    }

    /// Deals the card at the cursor and advances it.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::ExhaustedShoe`] if every card has been dealt.
    pub fn deal(&mut self) -> Result<Card, DealError> {
        let card = *self
            .cards
            .get(self.cursor)
            .ok_or(DealError::ExhaustedShoe)?;
        self.cursor += 1;
        Ok(card)
    }

    /// Returns the number of cards dealt since the last shuffle.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the number of cards still available.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Returns the total number of cards in the shoe, dealt or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns every card in shoe order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Shoe {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sorted(cards: &[Card]) -> Vec<(u8, u8)> {
        let mut keys: Vec<(u8, u8)> = cards.iter().map(|c| (c.suit as u8, c.face)).collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn build_is_canonical() {
        let shoe = Shoe::new();
        assert_eq!(shoe.len(), DECK_SIZE);
        assert_eq!(shoe.cards()[0], Card::new(Suit::Spade, 1));
        assert_eq!(shoe.cards()[13], Card::new(Suit::Heart, 1));
        assert_eq!(shoe.cards()[51], Card::new(Suit::Diamond, 13));
    }

    #[test]
    fn shuffle_permutes_without_loss() {
        let canonical = sorted(Shoe::new().cards());
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut shoe = Shoe::new();
        for _ in 0..20 {
            shoe.shuffle(&mut rng);
            assert_eq!(sorted(shoe.cards()), canonical);
        }
    }

    #[test]
    fn shuffle_rewinds_cursor() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut shoe = Shoe::new();
        shoe.deal().unwrap();
        shoe.deal().unwrap();
        assert_eq!(shoe.cursor(), 2);
        shoe.shuffle(&mut rng);
        assert_eq!(shoe.cursor(), 0);
        assert_eq!(shoe.remaining(), DECK_SIZE);
    }

    #[test]
    fn deals_every_card_once_then_exhausts() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut shoe = Shoe::new();
        shoe.shuffle(&mut rng);

        let mut dealt = Vec::new();
        for count in 1..=DECK_SIZE {
            dealt.push(shoe.deal().unwrap());
            assert_eq!(shoe.cursor(), count);
        }
        assert_eq!(sorted(&dealt), sorted(Shoe::new().cards()));
        assert_eq!(shoe.deal(), Err(DealError::ExhaustedShoe));
        assert_eq!(shoe.cursor(), DECK_SIZE);
    }

    #[test]
    fn truncate_shortens_shoe() {
        let mut shoe = Shoe::new();
        shoe.truncate(3);
        assert_eq!(shoe.len(), 3);
        for _ in 0..3 {
            shoe.deal().unwrap();
        }
        assert_eq!(shoe.deal(), Err(DealError::ExhaustedShoe));
    }

    #[test]
    fn counts_follow_deals() {
        let mut shoe = Shoe::from_cards(vec![Card::new(Suit::Club, 2), Card::new(Suit::Club, 3)]);
        assert_eq!((shoe.len(), shoe.remaining()), (2, 2));
        shoe.deal().unwrap();
        assert_eq!((shoe.len(), shoe.remaining()), (2, 1));
        assert!(!shoe.is_empty());

        shoe.truncate(0);
        assert!(shoe.is_empty());
        assert_eq!(shoe.remaining(), 0);
    }
}
