use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use crate::cards::{CardKey, CARDS_PER_DECK};
use crate::errors::GameError;

/// Shoe limits owned by a [`Deck`]. Every deck in the shoe is a full
/// 52-card deck; only the number of decks is configurable.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DeckConfig {
    pub max_decks: u8,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self { max_decks: 10 }
    }
}

/// A shoe of card keys dealt without replacement.
///
/// # Examples
///
/// ```
/// use blackjack_engine::deck::Deck;
///
/// let mut deck = Deck::new_with_seed(2, 42);
/// assert_eq!(deck.shoe_size(), 104);
///
/// let key = deck.draw().unwrap();
/// assert!((1..=104).contains(&key));
/// assert_eq!(deck.remaining(), 103);
///
/// deck.reshuffle();
/// assert_eq!(deck.remaining(), 104);
/// ```
#[derive(Debug)]
pub struct Deck {
    config: DeckConfig,
    num_decks: u8,
    remaining: Vec<CardKey>,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Builds a shuffled shoe. The deck count is clamped to `1..=10`.
    pub fn new_with_seed(num_decks: u8, seed: u64) -> Self {
        Self::with_config(DeckConfig::default(), num_decks, seed)
    }

    pub fn with_config(config: DeckConfig, num_decks: u8, seed: u64) -> Self {
        let num_decks = num_decks.clamp(1, config.max_decks.max(1));
        let mut deck = Self {
            config,
            num_decks,
            remaining: Vec::new(),
            rng: ChaCha20Rng::seed_from_u64(seed),
        };
        deck.refill();
        deck
    }

    /// Number of decks actually in the shoe after clamping.
    pub fn num_decks(&self) -> u8 {
        self.num_decks
    }

    pub fn shoe_size(&self) -> usize {
        usize::from(CARDS_PER_DECK) * usize::from(self.num_decks)
    }

    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Removes and returns one key. Every remaining key is equally likely,
    /// and no key is returned twice before the next reshuffle.
    pub fn draw(&mut self) -> Result<CardKey, GameError> {
        let key = self.remaining.pop().ok_or(GameError::EmptyDeck)?;
        debug!(key, remaining = self.remaining.len(), "drew card");
        Ok(key)
    }

    /// Returns every key to the shoe and shuffles. Cards still held in hands
    /// are treated as returned.
    pub fn reshuffle(&mut self) {
        self.refill();
        info!(
            decks = self.num_decks,
            cards = self.remaining.len(),
            "reshuffled shoe"
        );
    }

    fn refill(&mut self) {
        // at most 255 decks of 52, so the top key always fits a CardKey
        let size = CARDS_PER_DECK * CardKey::from(self.num_decks);
        self.remaining.clear();
        self.remaining.extend(1..=size);
        self.remaining.shuffle(&mut self.rng);
    }
}
