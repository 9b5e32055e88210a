//! Error types for deck operations.
//!
//! Every check happens before the deck is mutated, so a returned error
//! leaves the deck exactly as it was.

use thiserror::Error;

/// Errors that can occur when removing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RemoveError {
    /// The deck holds no cards.
    #[error("the deck is empty")]
    Empty,
}

/// Errors that can occur when reading through the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    /// The cursor is past the end or was reset by a mutation.
    #[error("the cursor is not on a card")]
    NoCard,
}

/// Errors that can occur during shuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShuffleError {
    /// The deck count is zero.
    #[error("the number of decks is zero")]
    NoDecks,
    /// The configured draw limit ran out before the shoe was full.
    #[error("draw limit reached with {placed} cards placed")]
    DrawLimit {
        /// Cards placed before giving up.
        placed: usize,
    },
}
