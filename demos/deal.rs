//! Shuffles a shoe with a dot progress bar and deals until penetration.
//!
//! Run with `RUST_LOG=debug` to see the shuffle log.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjshoe::{Deck, DeckOptions, SeededSource, ShuffleProgress};

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = DeckOptions::default().with_decks(2).with_penetration(0.75);
    let mut deck = Deck::with_options(options);
    let mut rng = SeededSource::new(seed);

    for round in 1..=2 {
        println!("Shuffling deck");
        let mut shown = 0;
        let result = deck.shuffle(&mut rng, &mut |progress: ShuffleProgress| {
            while shown < progress.dots {
                print!(".");
                shown += 1;
            }
            let _ = io::stdout().flush();
        });
        println!();

        match result {
            Ok(draws) => println!("{} cards from {draws} draws", deck.len()),
            Err(err) => {
                println!("Shuffle error: {err}");
                return;
            }
        }

        let mut hand = Vec::new();
        while !deck.needs_reshuffle() {
            let Ok(card) = deck.current().copied() else {
                break;
            };
            deck.advance();
            hand.push(card.to_string());
            if hand.len() == 13 {
                println!("{}", hand.join(" "));
                hand.clear();
            }
        }
        if !hand.is_empty() {
            println!("{}", hand.join(" "));
        }
        println!(
            "Round {round}: dealt {} of {} cards, reshuffle due",
            deck.dealt(),
            deck.len()
        );
    }
}
