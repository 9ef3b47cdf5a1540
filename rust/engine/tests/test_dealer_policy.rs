use blackjack_engine::engine::Engine;
use blackjack_engine::hand::score_cards;
use blackjack_engine::rules::{Outcome, DEALER_STANDS_ON};

#[test]
fn dealer_stops_on_first_total_of_17_or_more() {
    for seed in 0..200u64 {
        let mut engine = Engine::new(1, 1, seed).unwrap();
        engine.start_round().unwrap();
        let turn = engine.play_dealer().unwrap();

        // replay the dealer's cards one at a time
        let hidden = turn.hidden.expect("hidden card dealt");
        let mut cards = vec![hidden];
        cards.extend_from_slice(engine.dealer().shown_cards());
        let start = cards.len() - turn.drawn.len();
        for n in start..cards.len() {
            let partial = score_cards(&cards[..n]);
            assert!(
                partial.total < DEALER_STANDS_ON,
                "seed {} kept hitting at {}",
                seed,
                partial.total
            );
        }
        assert!(turn.score.total >= DEALER_STANDS_ON);
        assert_eq!(turn.score.is_bust(), turn.score.total > 21, "seed {}", seed);
    }
}

#[test]
fn same_seed_plays_same_dealer_turn() {
    let play = |seed| {
        let mut engine = Engine::new(2, 4, seed).unwrap();
        engine.start_round().unwrap();
        engine.play_dealer().unwrap()
    };
    assert_eq!(play(2024), play(2024));
}

#[test]
fn results_cover_every_player() {
    let mut engine = Engine::new(3, 1, 8).unwrap();
    engine.start_round().unwrap();
    let turn = engine.play_dealer().unwrap();
    let results = engine.results();
    assert_eq!(results.len(), 3);
    for (id, score, outcome) in results {
        assert!(id < 3);
        if turn.score.is_bust() {
            assert_eq!(outcome, Outcome::Win, "player {} with {}", id, score.total);
        }
    }
}

#[test]
fn busting_every_player_ends_with_no_one_alive() {
    let mut engine = Engine::new(1, 1, 31).unwrap();
    engine.start_round().unwrap();
    while !engine.players()[0].score().is_bust() {
        engine.hit(0).unwrap();
    }
    assert!(!engine.any_player_alive());
    assert_eq!(engine.results()[0].2, Outcome::Lose);
}
