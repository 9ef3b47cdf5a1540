use std::fmt;

/// Identifies one physical card in a shoe of one or more decks.
///
/// Keys start at 1. Key `k` and key `k + 52` are the same rank and suit
/// drawn from different decks of the shoe.
pub type CardKey = u16;

/// Number of cards in a single standard deck.
pub const CARDS_PER_DECK: u16 = 52;

/// Number of cards in a single suit.
pub const CARDS_PER_SUIT: u16 = 13;

/// Represents one of the four suits, in key order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Suit {
    /// Keys 1..=13 of each deck
    Spades,
    /// Keys 14..=26 of each deck
    Hearts,
    /// Keys 27..=39 of each deck
    Clubs,
    /// Keys 40..=52 of each deck
    Diamonds,
}

impl Suit {
    fn from_index(idx: u16) -> Suit {
        match idx {
            0 => Suit::Spades,
            1 => Suit::Hearts,
            2 => Suit::Clubs,
            _ => Suit::Diamonds,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Spades => "Spades",
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
        }
    }
}

/// Represents the rank of a card. Aces are low (1); face cards are 11 to 13.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub fn from_u8(v: u8) -> Rank {
        match v {
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            _ => Rank::Ace,
        }
    }

    /// Numeric rank, 1 (Ace) through 13 (King).
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::Queen | Rank::King)
    }

    fn name(self) -> Option<&'static str> {
        match self {
            Rank::Ace => Some("Ace"),
            Rank::Jack => Some("Jack"),
            Rank::Queen => Some("Queen"),
            Rank::King => Some("King"),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.number()),
        }
    }
}

/// Read-only view of a card key: its rank and suit.
///
/// Cards carry no identity of their own; two keys from different decks of
/// the shoe produce equal cards.
///
/// # Examples
///
/// ```
/// use blackjack_engine::cards::{Card, Rank, Suit};
///
/// let card = Card::from_key(1);
/// assert_eq!(card.rank, Rank::Ace);
/// assert_eq!(card.suit, Suit::Spades);
/// assert_eq!(card.to_string(), "Ace of Spades");
///
/// // Second deck of the shoe
/// assert_eq!(Card::from_key(53), card);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Derives rank and suit from a key. Keys are expected to be positive;
    /// key 0 wraps around to the last card of a deck.
    pub fn from_key(key: CardKey) -> Card {
        let offset = (i32::from(key) - 1).rem_euclid(i32::from(CARDS_PER_DECK)) as u16;
        Card {
            rank: Rank::from_u8((offset % CARDS_PER_SUIT) as u8 + 1),
            suit: Suit::from_index(offset / CARDS_PER_SUIT),
        }
    }

    /// Human readable name, e.g. "King of Diamonds" or "10 of Hearts".
    pub fn display_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_follows_key_modulo_13() {
        for key in 1..=CARDS_PER_DECK {
            let card = Card::from_key(key);
            assert_eq!(card.rank.number() as u16, (key - 1) % 13 + 1, "key {}", key);
        }
    }

    #[test]
    fn suits_cycle_every_13_keys() {
        assert_eq!(Card::from_key(13).suit, Suit::Spades);
        assert_eq!(Card::from_key(14).suit, Suit::Hearts);
        assert_eq!(Card::from_key(27).suit, Suit::Clubs);
        assert_eq!(Card::from_key(52).suit, Suit::Diamonds);
    }

    #[test]
    fn display_names() {
        assert_eq!(Card::from_key(1).display_name(), "Ace of Spades");
        assert_eq!(Card::from_key(23).display_name(), "10 of Hearts");
        assert_eq!(Card::from_key(52).display_name(), "King of Diamonds");
        assert_eq!(Card::from_key(37).display_name(), "Jack of Clubs");
        assert_eq!(Card::from_key(51).display_name(), "Queen of Diamonds");
    }

    #[test]
    fn zero_key_wraps_to_last_card() {
        assert_eq!(Card::from_key(0), Card::from_key(52));
    }
}
