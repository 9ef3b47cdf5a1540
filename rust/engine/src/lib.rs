//! # blackjack-engine: Blackjack Card Model
//!
//! Cards, a multi-deck shoe, player and dealer hands with soft-ace scoring,
//! and round orchestration for a table of players against one dealer.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card keys and their (rank, suit) view
//! - [`deck`] - Seeded multi-deck shoe, drawn without replacement
//! - [`hand`] - Player and dealer hands, soft-ace scoring
//! - [`rules`] - Dealer policy and round settlement
//! - [`engine`] - Round orchestration with shoe exhaustion recovery
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::hand::Hand;
//!
//! let mut hand = Hand::new(0);
//! hand.add_card(1); // Ace of Spades
//! hand.add_card(13); // King of Spades
//! assert_eq!(hand.score().total, 21);
//! ```
//!
//! ## Deterministic Shoes
//!
//! ```rust
//! use blackjack_engine::deck::Deck;
//!
//! let mut d1 = Deck::new_with_seed(6, 42);
//! let mut d2 = Deck::new_with_seed(6, 42);
//! assert_eq!(d1.draw(), d2.draw());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod rules;
