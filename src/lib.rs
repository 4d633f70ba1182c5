//! A single-table blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that deals from a fresh shoe, scores
//! both hands with every ace counted as 1 or 11, and settles blackjacks,
//! busts, and comparisons. [`Session`] repeats rounds against external input
//! and presentation collaborators.
//!
//! # Example
//!
//! ```
//! use bjtable::{GameOptions, Round};
//!
//! let mut round = Round::new(GameOptions::default(), 42);
//! round.start().unwrap();
//! if !round.is_over() {
//!     round.player_stand().unwrap();
//!     round.dealer_play().unwrap();
//! }
//! assert!(round.outcome().is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod session;
pub mod shoe;

// Re-export main types
pub use card::{BLACKJACK, Card, DEALER_STAND_SCORE, DECK_SIZE, Suit};
pub use error::{DealError, RoundError, ScoreError};
pub use game::{Round, RoundState, TableView};
pub use hand::{CardView, DealerHand, Hand};
pub use options::GameOptions;
pub use result::{Announcement, Outcome, Reason, RoundResult, Winner};
pub use session::{Continuation, InputCollector, PlayerAction, Presenter, Session, SessionStats};
pub use shoe::Shoe;
