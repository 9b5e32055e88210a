//! Card values and the links that chain them inside a [`Deck`](crate::Deck).

use core::fmt;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Lowest rank (ace).
pub const MIN_RANK: u8 = 1;

/// Highest rank (king).
pub const MAX_RANK: u8 = 13;

/// Lowest suit code.
pub const MIN_SUIT: u8 = 1;

/// Highest suit code.
pub const MAX_SUIT: u8 = 4;

/// Card suit.
///
/// Cards store their suit as a raw code so that a [`Deck`](crate::Deck) can
/// hold whatever it is given; this enum names the four valid codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts (code 1).
    Hearts,
    /// Diamonds (code 2).
    Diamonds,
    /// Clubs (code 3).
    Clubs,
    /// Spades (code 4).
    Spades,
}

impl Suit {
    /// All suits in code order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Returns the numeric code stored in a [`Card`].
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Hearts => 1,
            Self::Diamonds => 2,
            Self::Clubs => 3,
            Self::Spades => 4,
        }
    }

    /// Maps a suit code back to a suit, or `None` outside 1..=4.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Hearts),
            2 => Some(Self::Diamonds),
            3 => Some(Self::Clubs),
            4 => Some(Self::Spades),
            _ => None,
        }
    }

    const fn letter(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }
}

/// Stable handle of a card slot inside a deck's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub(crate) usize);

impl CardId {
    /// Returns the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A playing card linked into a deck.
///
/// `left` and `right` point at the neighbouring cards of the owning deck.
/// They carry no ownership and mean nothing once the card has been removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: u8,
    suit: u8,
    left: Option<CardId>,
    right: Option<CardId>,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate rank or suit. Domain checks are
    /// left to the deck that generates cards.
    #[must_use]
    pub const fn new(rank: u8, suit: u8, left: Option<CardId>, right: Option<CardId>) -> Self {
        Self {
            rank,
            suit,
            left,
            right,
        }
    }

    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn rank(&self) -> u8 {
        self.rank
    }

    /// The suit code of the card.
    #[must_use]
    pub const fn suit(&self) -> u8 {
        self.suit
    }

    /// The suit as a [`Suit`], if the code is valid.
    #[must_use]
    pub const fn suit_kind(&self) -> Option<Suit> {
        Suit::from_code(self.suit)
    }

    /// The card to the left (towards the front).
    #[must_use]
    pub const fn left(&self) -> Option<CardId> {
        self.left
    }

    /// The card to the right (towards the rear).
    #[must_use]
    pub const fn right(&self) -> Option<CardId> {
        self.right
    }

    /// Sets the rank.
    pub const fn set_rank(&mut self, rank: u8) {
        self.rank = rank;
    }

    /// Sets the suit code.
    pub const fn set_suit(&mut self, suit: u8) {
        self.suit = suit;
    }

    /// Sets the left link.
    pub const fn set_left(&mut self, left: Option<CardId>) {
        self.left = left;
    }

    /// Sets the right link.
    pub const fn set_right(&mut self, right: Option<CardId>) {
        self.right = right;
    }

    /// Whether rank and suit match.
    #[must_use]
    pub const fn is(&self, rank: u8, suit: u8) -> bool {
        self.rank == rank && self.suit == suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            1 => f.write_str("A")?,
            2..=10 => write!(f, "{}", self.rank)?,
            11 => f.write_str("J")?,
            12 => f.write_str("Q")?,
            13 => f.write_str("K")?,
            _ => f.write_str("?")?,
        }
        match self.suit_kind() {
            Some(suit) => write!(f, "{}", suit.letter()),
            None => f.write_str("?"),
        }
    }
}
