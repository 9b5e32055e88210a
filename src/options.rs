//! Deck configuration options.

/// Configuration options for a [`Deck`](crate::Deck).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjshoe::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_decks(6)
///     .with_penetration(0.8)
///     .with_progress_width(16);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DeckOptions {
    /// Number of collated decks. 0 until configured; shuffling needs at least 1.
    pub decks: u8,
    /// Width of the progress bar, in dots, reached when a shuffle completes.
    pub progress_width: u8,
    /// Deck penetration (fraction of the shoe dealt before reshuffle).
    /// 0 to disable reshuffling.
    pub penetration: f64,
    /// Maximum random draws per shuffle. 0 for no limit.
    pub draw_limit: usize,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            decks: 0,
            progress_width: 20,
            penetration: 0.75,
            draw_limit: 0,
        }
    }
}

impl DeckOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use bjshoe::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the progress bar width.
    ///
    /// # Example
    ///
    /// ```
    /// use bjshoe::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_progress_width(40);
    /// assert_eq!(options.progress_width, 40);
    /// ```
    #[must_use]
    pub const fn with_progress_width(mut self, width: u8) -> Self {
        self.progress_width = width;
        self
    }

    /// Sets the deck penetration.
    ///
    /// # Example
    ///
    /// ```
    /// use bjshoe::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_penetration(0.80);
    /// assert_eq!(options.penetration, 0.80);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }

    /// Sets the draw limit.
    ///
    /// # Example
    ///
    /// ```
    /// use bjshoe::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_draw_limit(100_000);
    /// assert_eq!(options.draw_limit, 100_000);
    /// ```
    #[must_use]
    pub const fn with_draw_limit(mut self, limit: usize) -> Self {
        self.draw_limit = limit;
        self
    }
}
