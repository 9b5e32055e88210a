//! The linked shoe and its shuffle.

use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::card::{Card, CardId, DECK_SIZE, MAX_RANK, MAX_SUIT, MIN_RANK, MIN_SUIT};
use crate::error::{CursorError, RemoveError, ShuffleError};
use crate::options::DeckOptions;
use crate::progress::{Progress, ShuffleProgress};
use crate::random::RandomSource;

/// A doubly linked shoe of one or more collated decks.
///
/// Cards live in an arena of slots and link to each other by [`CardId`], so
/// insertion and removal at either end are O(1). A single cursor walks the
/// shoe from front to rear while dealing.
///
/// The cursor is reset whenever a card is added or removed, so it never
/// refers to a card that is gone. Call [`Deck::start`] again after mutating.
///
/// # Example
///
/// ```
/// use bjshoe::{Deck, DeckOptions, NoProgress, SeededSource};
///
/// let mut deck = Deck::with_options(DeckOptions::default().with_decks(2));
/// let mut rng = SeededSource::new(42);
/// deck.shuffle(&mut rng, &mut NoProgress).unwrap();
/// assert_eq!(deck.len(), 104);
/// assert!(deck.is_item());
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Card slots. `None` marks a vacant slot.
    slots: Vec<Option<Card>>,
    /// Vacant slots available for reuse.
    vacant: Vec<CardId>,
    front: Option<CardId>,
    rear: Option<CardId>,
    cursor: Option<CardId>,
    /// Cards the cursor has moved past since the last `start`.
    dealt: usize,
    count: usize,
    options: DeckOptions,
}

impl Deck {
    /// Creates an empty deck with default options (zero decks configured).
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(DeckOptions::default())
    }

    /// Creates an empty deck with the given options.
    #[must_use]
    pub const fn with_options(options: DeckOptions) -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
            front: None,
            rear: None,
            cursor: None,
            dealt: 0,
            count: 0,
            options,
        }
    }

    /// Returns the deck options.
    #[must_use]
    pub const fn options(&self) -> &DeckOptions {
        &self.options
    }

    /// Returns the number of collated decks.
    #[must_use]
    pub const fn num_decks(&self) -> u8 {
        self.options.decks
    }

    /// Sets the number of collated decks used by the next shuffle.
    pub const fn set_decks(&mut self, decks: u8) {
        self.options.decks = decks;
    }

    /// Returns the number of linked cards.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns whether the deck holds no cards.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the front card's id.
    #[must_use]
    pub const fn front(&self) -> Option<CardId> {
        self.front
    }

    /// Returns the rear card's id.
    #[must_use]
    pub const fn rear(&self) -> Option<CardId> {
        self.rear
    }

    /// Looks up a linked card.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    fn right_of(&self, id: CardId) -> Option<CardId> {
        self.card(id).and_then(Card::right)
    }

    /// Stores a card in a vacant slot, growing the arena if none is free.
    fn alloc(&mut self, card: Card) -> CardId {
        if let Some(id) = self.vacant.pop() {
            self.slots[id.0] = Some(card);
            id
        } else {
            self.slots.push(Some(card));
            CardId(self.slots.len() - 1)
        }
    }

    fn release(&mut self, id: CardId) -> Option<Card> {
        let card = self.slots.get_mut(id.0)?.take()?;
        self.vacant.push(id);
        Some(card)
    }

    const fn reset_cursor(&mut self) {
        self.cursor = None;
        self.dealt = 0;
    }

    /// Adds a card to the front of the deck.
    pub fn add_front(&mut self, rank: u8, suit: u8) {
        let old_front = self.front;
        let id = self.alloc(Card::new(rank, suit, None, old_front));
        match old_front.and_then(|front| self.card_mut(front)) {
            Some(front) => front.set_left(Some(id)),
            None => self.rear = Some(id),
        }
        self.front = Some(id);
        self.count += 1;
        self.reset_cursor();
    }

    /// Adds a card to the rear of the deck.
    pub fn add_rear(&mut self, rank: u8, suit: u8) {
        let old_rear = self.rear;
        let id = self.alloc(Card::new(rank, suit, old_rear, None));
        match old_rear.and_then(|rear| self.card_mut(rear)) {
            Some(rear) => rear.set_right(Some(id)),
            None => self.front = Some(id),
        }
        self.rear = Some(id);
        self.count += 1;
        self.reset_cursor();
    }

    /// Removes and returns the front card, with its links cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn remove_front(&mut self) -> Result<Card, RemoveError> {
        let id = self.front.ok_or(RemoveError::Empty)?;
        let mut card = self.release(id).ok_or(RemoveError::Empty)?;

        self.front = card.right();
        match self.front.and_then(|front| self.card_mut(front)) {
            Some(front) => front.set_left(None),
            None => self.rear = None,
        }
        self.count -= 1;
        self.reset_cursor();

        card.set_right(None);
        Ok(card)
    }

    /// Removes and returns the rear card, with its links cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the deck is empty.
    pub fn remove_rear(&mut self) -> Result<Card, RemoveError> {
        let id = self.rear.ok_or(RemoveError::Empty)?;
        let mut card = self.release(id).ok_or(RemoveError::Empty)?;

        self.rear = card.left();
        match self.rear.and_then(|rear| self.card_mut(rear)) {
            Some(rear) => rear.set_right(None),
            None => self.front = None,
        }
        self.count -= 1;
        self.reset_cursor();

        card.set_left(None);
        Ok(card)
    }

    /// Removes every card. Does nothing on an empty deck.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        log::trace!("clearing {} cards", self.count);
        while self.remove_front().is_ok() {}
        self.slots.clear();
        self.vacant.clear();
    }

    /// Returns whether `(rank, suit)` is already in the deck at `location`.
    ///
    /// Cards are collated round-robin across `num_decks` decks, so the deck at
    /// `location` is made of positions `location`, `location + num_decks`,
    /// `location + 2 * num_decks`, and so on, counting from 0 at the front.
    /// Only those positions are compared. A `num_decks` of 0 searches every
    /// position from `location` on.
    #[must_use]
    pub fn find(&self, rank: u8, suit: u8, num_decks: u8, location: u8) -> bool {
        let stride = usize::from(num_decks.max(1));
        let mut next = self.skip(self.front, usize::from(location));

        while let Some(card) = next.and_then(|id| self.card(id)) {
            if card.is(rank, suit) {
                return true;
            }
            next = self.skip(next, stride);
        }
        false
    }

    /// Follows `steps` right-links from `from`.
    fn skip(&self, mut from: Option<CardId>, steps: usize) -> Option<CardId> {
        for _ in 0..steps {
            from = self.right_of(from?);
        }
        from
    }

    /// Places the cursor on the front card.
    pub const fn start(&mut self) {
        self.cursor = self.front;
        self.dealt = 0;
    }

    /// Moves the cursor one card towards the rear.
    ///
    /// Does nothing once the cursor has run off the end.
    pub fn advance(&mut self) {
        if let Some(id) = self.cursor {
            self.cursor = self.right_of(id);
            self.dealt += 1;
        }
    }

    /// Returns whether the cursor is on a card.
    #[must_use]
    pub const fn is_item(&self) -> bool {
        self.cursor.is_some()
    }

    /// Returns the card under the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the cursor is not on a card.
    pub fn current(&self) -> Result<&Card, CursorError> {
        self.cursor
            .and_then(|id| self.card(id))
            .ok_or(CursorError::NoCard)
    }

    /// Returns the rank of the card under the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the cursor is not on a card.
    pub fn current_rank(&self) -> Result<u8, CursorError> {
        self.current().map(Card::rank)
    }

    /// Returns the suit code of the card under the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the cursor is not on a card.
    pub fn current_suit(&self) -> Result<u8, CursorError> {
        self.current().map(Card::suit)
    }

    /// Deals the card under the cursor as `(rank, suit)` and advances.
    ///
    /// # Errors
    ///
    /// Returns an error if the cursor is not on a card.
    pub fn deal(&mut self) -> Result<(u8, u8), CursorError> {
        let card = self.current()?;
        let dealt = (card.rank(), card.suit());
        self.advance();
        Ok(dealt)
    }

    /// Returns how many cards the cursor has passed since [`Deck::start`].
    #[must_use]
    pub const fn dealt(&self) -> usize {
        self.dealt
    }

    /// Returns whether enough of the shoe has been dealt to reshuffle.
    ///
    /// Compares the dealt fraction of a full shoe against the configured
    /// penetration. If penetration is 0 or no decks are set, always returns
    /// `false`.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        if self.options.penetration == 0.0 || self.options.decks == 0 {
            return false;
        }

        let total_cards = usize::from(self.options.decks) * DECK_SIZE;
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let used_ratio = self.dealt as f64 / total_cards as f64;

        used_ratio >= self.options.penetration
    }

    /// Returns an iterator over the linked cards, front to rear.
    ///
    /// Reversing it walks the left-links from the rear.
    #[must_use]
    pub const fn iter(&self) -> Iter<'_> {
        Iter {
            deck: self,
            front: self.front,
            rear: self.rear,
            remaining: self.count,
        }
    }

    /// Rebuilds the deck as a freshly shuffled, collated shoe.
    ///
    /// The deck is cleared and `rng` reseeded, then cards are drawn at random
    /// and appended to the rear. The next card always belongs to deck
    /// `len % num_decks`; a draw already present in that deck is rejected and
    /// drawn again. `progress` hears about every accepted card. When the shoe
    /// holds `52 * num_decks` cards the cursor is placed on the front.
    ///
    /// Returns the number of draws made, rejected ones included.
    ///
    /// # Errors
    ///
    /// Returns [`ShuffleError::NoDecks`] if no decks are configured; the deck
    /// is left untouched. Returns [`ShuffleError::DrawLimit`] if the configured
    /// draw limit runs out; the deck keeps the cards placed so far and the
    /// cursor is not set.
    pub fn shuffle<R, P>(&mut self, rng: &mut R, progress: &mut P) -> Result<usize, ShuffleError>
    where
        R: RandomSource + ?Sized,
        P: Progress + ?Sized,
    {
        let decks = self.options.decks;
        if decks == 0 {
            return Err(ShuffleError::NoDecks);
        }

        self.clear();
        rng.reseed();

        let total = usize::from(decks) * DECK_SIZE;
        let limit = self.options.draw_limit;
        self.slots.reserve(total);
        log::debug!("shuffling {decks} collated decks ({total} cards)");

        let mut draws = 0;
        while self.count < total {
            if limit != 0 && draws >= limit {
                log::warn!(
                    "draw limit {limit} reached with {} of {total} cards placed",
                    self.count
                );
                return Err(ShuffleError::DrawLimit { placed: self.count });
            }

            let location = (self.count % usize::from(decks)) as u8;
            let rank = rng.uniform(MIN_RANK, MAX_RANK);
            let suit = rng.uniform(MIN_SUIT, MAX_SUIT);
            draws += 1;

            if self.find(rank, suit, decks, location) {
                continue;
            }

            self.add_rear(rank, suit);
            progress.report(ShuffleProgress::new(
                self.count,
                decks,
                self.options.progress_width,
            ));
        }

        self.start();
        log::debug!("shuffled {total} cards in {draws} draws");
        Ok(draws)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the cards of a [`Deck`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    deck: &'a Deck,
    front: Option<CardId>,
    rear: Option<CardId>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Card;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let card = self.deck.card(self.front?)?;
        self.front = card.right();
        self.remaining -= 1;
        Some(card)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let card = self.deck.card(self.rear?)?;
        self.rear = card.left();
        self.remaining -= 1;
        Some(card)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
