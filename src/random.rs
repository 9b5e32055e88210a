//! Random sources consumed by [`Deck::shuffle`](crate::Deck::shuffle).

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A uniform integer generator.
///
/// Where the entropy comes from (a floating analog pin, a hardware RNG, a
/// fixed test seed) is up to the implementor.
pub trait RandomSource {
    /// Reseeds the generator. Called once at the start of every shuffle.
    fn reseed(&mut self);

    /// Draws an integer uniformly from `lo..=hi`.
    fn uniform(&mut self, lo: u8, hi: u8) -> u8;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn reseed(&mut self) {
        (**self).reseed();
    }

    fn uniform(&mut self, lo: u8, hi: u8) -> u8 {
        (**self).uniform(lo, hi)
    }
}

/// A [`RandomSource`] backed by a seedable `rand` generator.
///
/// Reseeding derives a fresh generator from the current stream, so a fixed
/// construction seed yields the same sequence of shuffles every run.
///
/// ```
/// use bjshoe::{RandomSource, SeededSource};
///
/// let mut a = SeededSource::new(7);
/// let mut b = SeededSource::new(7);
/// a.reseed();
/// b.reseed();
/// assert_eq!(a.uniform(1, 13), b.uniform(1, 13));
/// ```
#[derive(Debug, Clone)]
pub struct SeededSource<R = ChaCha8Rng> {
    rng: R,
}

impl SeededSource<ChaCha8Rng> {
    /// Creates a ChaCha8-backed source from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl<R: RngCore + SeedableRng> SeededSource<R> {
    /// Wraps an existing generator.
    #[must_use]
    pub const fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Unwraps the generator.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore + SeedableRng> RandomSource for SeededSource<R> {
    fn reseed(&mut self) {
        self.rng = R::from_rng(&mut self.rng);
    }

    fn uniform(&mut self, lo: u8, hi: u8) -> u8 {
        self.rng.random_range(lo..=hi)
    }
}
