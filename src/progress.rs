//! Shuffle progress reporting.

use crate::card::DECK_SIZE;

/// A progress update emitted after each card a shuffle places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleProgress {
    /// Cards placed so far.
    pub placed: usize,
    /// Cards in a full shoe.
    pub total: usize,
    /// Dots to draw on a bar of the configured progress width.
    pub dots: u8,
}

impl ShuffleProgress {
    /// Builds an update for `placed` cards out of a `decks`-deck shoe.
    ///
    /// Dots grow with the cards placed per deck, so they reach `width` once
    /// every collated deck is full.
    #[must_use]
    pub fn new(placed: usize, decks: u8, width: u8) -> Self {
        let decks = usize::from(decks.max(1));
        let per_deck = (placed / decks).min(DECK_SIZE);
        Self {
            placed,
            total: decks * DECK_SIZE,
            dots: (per_deck * usize::from(width) / DECK_SIZE) as u8,
        }
    }

    /// Completion in whole percent.
    #[must_use]
    pub const fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        (self.placed * 100 / self.total) as u8
    }

    /// Whether the shoe is full.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.placed >= self.total
    }
}

/// Receives progress while a shuffle runs.
///
/// Implementations must return promptly and must not touch the deck being
/// shuffled. Closures taking a [`ShuffleProgress`] implement this trait.
pub trait Progress {
    /// Called after each accepted card.
    fn report(&mut self, progress: ShuffleProgress);
}

impl<F: FnMut(ShuffleProgress)> Progress for F {
    fn report(&mut self, progress: ShuffleProgress) {
        self(progress);
    }
}

/// A [`Progress`] that ignores every update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn report(&mut self, _progress: ShuffleProgress) {}
}
