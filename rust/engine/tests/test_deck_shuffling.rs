use std::collections::HashSet;

use blackjack_engine::cards::CardKey;
use blackjack_engine::deck::Deck;
use blackjack_engine::errors::GameError;

fn draw_all(deck: &mut Deck) -> Vec<CardKey> {
    let mut keys = Vec::new();
    while let Ok(k) = deck.draw() {
        keys.push(k);
    }
    keys
}

#[test]
fn every_shoe_size_deals_each_key_once() {
    for decks in 1..=10u8 {
        let mut deck = Deck::new_with_seed(decks, u64::from(decks));
        let size = 52 * usize::from(decks);
        assert_eq!(deck.remaining(), size);

        let keys = draw_all(&mut deck);
        assert_eq!(keys.len(), size, "decks={}", decks);
        let unique: HashSet<CardKey> = keys.iter().copied().collect();
        assert_eq!(unique.len(), size, "repeat key with decks={}", decks);
        assert!(keys.iter().all(|&k| k >= 1 && usize::from(k) <= size));
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), Err(GameError::EmptyDeck));
    }
}

#[test]
fn reshuffle_restores_full_population() {
    let mut deck = Deck::new_with_seed(3, 77);
    for _ in 0..40 {
        deck.draw().unwrap();
    }
    deck.reshuffle();
    assert_eq!(deck.remaining(), 156);
    let unique: HashSet<CardKey> = draw_all(&mut deck).into_iter().collect();
    assert_eq!(unique, (1..=156).collect::<HashSet<CardKey>>());
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(2, 12345);
    let mut d2 = Deck::new_with_seed(2, 12345);
    let a: Vec<CardKey> = (0..10).map(|_| d1.draw().unwrap()).collect();
    let b: Vec<CardKey> = (0..10).map(|_| d2.draw().unwrap()).collect();
    assert_eq!(a, b, "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1, 1);
    let mut d2 = Deck::new_with_seed(1, 2);
    let a: Vec<CardKey> = (0..10).map(|_| d1.draw().unwrap()).collect();
    let b: Vec<CardKey> = (0..10).map(|_| d2.draw().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn oversized_shoe_is_capped_at_ten_decks() {
    let mut deck = Deck::new_with_seed(25, 4);
    assert_eq!(deck.num_decks(), 10);
    assert_eq!(draw_all(&mut deck).len(), 520);
}
