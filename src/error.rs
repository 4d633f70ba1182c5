//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur when dealing from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards remain in the shoe.
    #[error("no cards left in the shoe")]
    ExhaustedShoe,
}

/// Errors that can occur when reading a hand's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// The hand has no total at or below 21. Check `is_bust` first.
    #[error("hand has no total at or below 21")]
    EmptyScoreSet,
}

/// Errors that can occur during round operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The action is not allowed in the current round state.
    #[error("invalid round state for this action")]
    InvalidRoundState,
    /// The shoe ran out of cards mid-round.
    #[error("no cards left in the shoe")]
    ExhaustedShoe,
    /// A best score was requested for a bust hand.
    #[error("hand has no total at or below 21")]
    EmptyScoreSet,
}

impl From<DealError> for RoundError {
    fn from(err: DealError) -> Self {
        match err {
            DealError::ExhaustedShoe => Self::ExhaustedShoe,
        }
    }
}

impl From<ScoreError> for RoundError {
    fn from(err: ScoreError) -> Self {
        match err {
            ScoreError::EmptyScoreSet => Self::EmptyScoreSet,
        }
    }
}
