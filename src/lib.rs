//! A collated multi-deck card shoe with optional `no_std` support.
//!
//! The crate provides a [`Deck`] type: a doubly linked shoe of cards with
//! insertion and removal at both ends, a dealing cursor, and a shuffle that
//! rebuilds one or more interleaved 52-card decks by rejection sampling.
//! Randomness and progress display are injected through the
//! [`RandomSource`] and [`Progress`] traits.
//!
//! # Example
//!
//! ```
//! use bjshoe::{Deck, DeckOptions, SeededSource};
//!
//! let mut deck = Deck::with_options(DeckOptions::default().with_decks(1));
//! let mut rng = SeededSource::new(42);
//! let mut dots = 0;
//! deck.shuffle(&mut rng, &mut |p: bjshoe::ShuffleProgress| dots = p.dots)
//!     .unwrap();
//! assert_eq!(deck.len(), 52);
//! assert_eq!(dots, 20);
//!
//! let (rank, suit) = deck.deal().unwrap();
//! assert!((1..=13).contains(&rank) && (1..=4).contains(&suit));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod progress;
pub mod random;

// Re-export main types
pub use card::{Card, CardId, DECK_SIZE, MAX_RANK, MAX_SUIT, MIN_RANK, MIN_SUIT, Suit};
pub use deck::{Deck, Iter};
pub use error::{CursorError, RemoveError, ShuffleError};
pub use options::DeckOptions;
pub use progress::{NoProgress, Progress, ShuffleProgress};
pub use random::{RandomSource, SeededSource};
