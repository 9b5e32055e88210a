//! Linked deck integration tests.

use bjshoe::{Card, CursorError, Deck, DeckOptions, RemoveError, Suit};

fn faces(deck: &Deck) -> Vec<(u8, u8)> {
    deck.iter().map(|card| (card.rank(), card.suit())).collect()
}

fn assert_links(deck: &Deck) {
    let forward = faces(deck);
    let mut backward: Vec<(u8, u8)> = deck
        .iter()
        .rev()
        .map(|card| (card.rank(), card.suit()))
        .collect();
    backward.reverse();

    assert_eq!(forward.len(), deck.len());
    assert_eq!(forward, backward);
    assert_eq!(deck.front().is_none(), deck.is_empty());
    assert_eq!(deck.rear().is_none(), deck.is_empty());

    if let (Some(front), Some(rear)) = (deck.front(), deck.rear()) {
        assert!(deck.card(front).unwrap().left().is_none());
        assert!(deck.card(rear).unwrap().right().is_none());
    }
}

#[test]
fn new_deck_is_empty() {
    let deck = Deck::new();
    assert!(deck.is_empty());
    assert_eq!(deck.len(), 0);
    assert_eq!(deck.num_decks(), 0);
    assert!(!deck.is_item());
    assert_links(&deck);
}

#[test]
fn add_front_and_rear_keep_order() {
    let mut deck = Deck::new();
    deck.add_rear(5, 1);
    deck.add_front(4, 2);
    deck.add_rear(6, 3);
    deck.add_front(3, 4);

    assert_eq!(deck.len(), 4);
    assert_eq!(faces(&deck), vec![(3, 4), (4, 2), (5, 1), (6, 3)]);
    assert_links(&deck);
}

#[test]
fn first_card_is_front_and_rear() {
    let mut deck = Deck::new();
    deck.add_front(1, 1);
    assert_eq!(deck.front(), deck.rear());

    let mut deck = Deck::new();
    deck.add_rear(1, 1);
    assert_eq!(deck.front(), deck.rear());
}

#[test]
fn add_then_remove_is_a_no_op() {
    let mut deck = Deck::new();
    deck.add_rear(2, 1);
    deck.add_rear(3, 1);
    let before = faces(&deck);
    let (front, rear) = (deck.front(), deck.rear());

    deck.add_front(9, 4);
    let removed = deck.remove_front().unwrap();
    assert_eq!((removed.rank(), removed.suit()), (9, 4));
    assert_eq!(faces(&deck), before);
    assert_eq!((deck.front(), deck.rear()), (front, rear));

    deck.add_rear(10, 3);
    let removed = deck.remove_rear().unwrap();
    assert_eq!((removed.rank(), removed.suit()), (10, 3));
    assert_eq!(faces(&deck), before);
    assert_eq!((deck.front(), deck.rear()), (front, rear));
    assert_links(&deck);
}

#[test]
fn removed_cards_come_back_unlinked() {
    let mut deck = Deck::new();
    deck.add_rear(1, 1);
    deck.add_rear(2, 2);
    deck.add_rear(3, 3);

    let front = deck.remove_front().unwrap();
    assert!(front.left().is_none() && front.right().is_none());
    let rear = deck.remove_rear().unwrap();
    assert!(rear.left().is_none() && rear.right().is_none());

    assert_eq!(faces(&deck), vec![(2, 2)]);
    assert_links(&deck);
}

#[test]
fn removing_last_card_empties_deck() {
    let mut deck = Deck::new();
    deck.add_rear(7, 2);
    deck.remove_front().unwrap();

    assert!(deck.is_empty());
    assert_links(&deck);
    assert_eq!(deck.remove_front().unwrap_err(), RemoveError::Empty);
    assert_eq!(deck.remove_rear().unwrap_err(), RemoveError::Empty);
    assert!(deck.is_empty());
}

#[test]
fn clear_is_idempotent() {
    let mut deck = Deck::new();
    for rank in 1..=13 {
        deck.add_rear(rank, 1);
    }
    deck.start();

    deck.clear();
    assert!(deck.is_empty());
    assert_eq!(deck.len(), 0);
    assert!(!deck.is_item());
    assert_links(&deck);

    deck.clear();
    assert!(deck.is_empty());

    deck.add_front(2, 2);
    assert_eq!(faces(&deck), vec![(2, 2)]);
}

#[test]
fn cursor_walks_front_to_rear() {
    let mut deck = Deck::new();
    deck.add_rear(10, 2);
    deck.add_rear(11, 3);

    deck.start();
    assert!(deck.is_item());
    assert_eq!(deck.current_rank(), Ok(10));
    assert_eq!(deck.current_suit(), Ok(2));

    deck.advance();
    assert_eq!(deck.current_rank(), Ok(11));
    assert_eq!(deck.current_suit(), Ok(3));

    deck.advance();
    assert!(!deck.is_item());
    assert_eq!(deck.current_rank(), Err(CursorError::NoCard));
    assert_eq!(deck.current_suit(), Err(CursorError::NoCard));

    deck.advance();
    assert!(!deck.is_item());
    assert_eq!(deck.dealt(), 2);
}

#[test]
fn start_on_empty_deck_has_no_item() {
    let mut deck = Deck::new();
    deck.start();
    assert!(!deck.is_item());
    assert_eq!(deck.deal(), Err(CursorError::NoCard));
}

#[test]
fn mutation_resets_cursor() {
    let mut deck = Deck::new();
    deck.add_rear(1, 1);
    deck.add_rear(2, 1);
    deck.start();
    deck.advance();
    assert_eq!(deck.dealt(), 1);

    deck.remove_rear().unwrap();
    assert!(!deck.is_item());
    assert_eq!(deck.dealt(), 0);
    assert_eq!(deck.current(), Err(CursorError::NoCard));

    deck.start();
    assert_eq!(deck.current_rank(), Ok(1));
    deck.add_front(3, 3);
    assert!(!deck.is_item());
}

#[test]
fn deal_reads_then_advances() {
    let mut deck = Deck::new();
    deck.add_rear(1, 4);
    deck.add_rear(13, 1);
    deck.start();

    assert_eq!(deck.deal(), Ok((1, 4)));
    assert_eq!(deck.deal(), Ok((13, 1)));
    assert_eq!(deck.deal(), Err(CursorError::NoCard));
    assert_eq!(deck.dealt(), 2);
}

#[test]
fn find_respects_interleave_slot() {
    let mut deck = Deck::new();
    // Two collated decks: slot 0 holds positions 0, 2, 4; slot 1 holds 1, 3.
    deck.add_rear(1, 1);
    deck.add_rear(2, 1);
    deck.add_rear(3, 1);
    deck.add_rear(4, 1);
    deck.add_rear(5, 1);

    assert!(deck.find(1, 1, 2, 0));
    assert!(deck.find(3, 1, 2, 0));
    assert!(deck.find(5, 1, 2, 0));
    assert!(!deck.find(2, 1, 2, 0));
    assert!(!deck.find(4, 1, 2, 0));

    assert!(deck.find(2, 1, 2, 1));
    assert!(deck.find(4, 1, 2, 1));
    assert!(!deck.find(1, 1, 2, 1));
    assert!(!deck.find(5, 1, 2, 1));

    assert!(deck.find(4, 1, 1, 0));
    assert!(!deck.find(4, 2, 1, 0));
}

#[test]
fn find_past_the_end_is_false() {
    let mut deck = Deck::new();
    assert!(!deck.find(1, 1, 1, 0));

    deck.add_rear(1, 1);
    assert!(!deck.find(1, 1, 2, 1));
    assert!(!deck.find(1, 1, 3, 5));
}

#[test]
fn find_with_zero_stride_searches_everything() {
    let mut deck = Deck::new();
    deck.add_rear(1, 1);
    deck.add_rear(2, 2);
    deck.add_rear(3, 3);

    assert!(deck.find(3, 3, 0, 0));
    assert!(!deck.find(1, 1, 0, 1));
}

#[test]
fn arena_slots_are_reused() {
    let mut deck = Deck::new();
    deck.add_rear(1, 1);
    deck.add_rear(2, 1);
    let rear = deck.rear().unwrap();

    deck.remove_rear().unwrap();
    assert!(deck.card(rear).is_none());

    deck.add_front(3, 1);
    assert_eq!(deck.front(), Some(rear));
    assert_eq!(faces(&deck), vec![(3, 1), (1, 1)]);
    assert_links(&deck);
}

#[test]
fn set_decks_updates_options() {
    let mut deck = Deck::with_options(DeckOptions::default().with_decks(2));
    assert_eq!(deck.num_decks(), 2);
    deck.set_decks(6);
    assert_eq!(deck.num_decks(), 6);
    assert_eq!(deck.options().decks, 6);
}

#[test]
fn needs_reshuffle_at_penetration() {
    let mut deck = Deck::with_options(DeckOptions::default().with_decks(1).with_penetration(0.5));
    for _ in 0..52 {
        deck.add_rear(2, 1);
    }
    deck.start();

    for _ in 0..25 {
        deck.advance();
    }
    assert!(!deck.needs_reshuffle());
    deck.advance();
    assert!(deck.needs_reshuffle());
}

#[test]
fn penetration_zero_never_reshuffles() {
    let mut deck = Deck::with_options(DeckOptions::default().with_decks(1).with_penetration(0.0));
    deck.add_rear(2, 1);
    deck.start();
    deck.advance();
    assert!(!deck.needs_reshuffle());

    let deck = Deck::new();
    assert!(!deck.needs_reshuffle());
}

#[test]
fn card_setters_are_independent() {
    let mut card = Card::new(1, 1, None, None);
    card.set_suit(3);
    assert_eq!(card.rank(), 1);
    assert_eq!(card.suit(), 3);

    card.set_rank(12);
    assert_eq!(card.rank(), 12);
    assert_eq!(card.suit(), 3);
    assert_eq!(card.suit_kind(), Some(Suit::Clubs));
}

#[test]
fn card_display() {
    assert_eq!(Card::new(1, 1, None, None).to_string(), "AH");
    assert_eq!(Card::new(10, 4, None, None).to_string(), "10S");
    assert_eq!(Card::new(12, 2, None, None).to_string(), "QD");
    assert_eq!(Card::new(14, 5, None, None).to_string(), "??");
}

#[test]
fn suit_codes_round_trip() {
    for suit in Suit::ALL {
        assert_eq!(Suit::from_code(suit.code()), Some(suit));
    }
    assert_eq!(Suit::from_code(0), None);
    assert_eq!(Suit::from_code(5), None);
}
