//! Card and hand formatters for terminal display.

use blackjack_engine::cards::{Card, Rank};
use blackjack_engine::hand::Score;

/// Card name with an indefinite article, e.g. "an Ace of Spades".
///
/// ```rust
/// use blackjack_engine::cards::Card;
/// # use blackjack_cli::formatters::with_article;
/// assert_eq!(with_article(&Card::from_key(1)), "an Ace of Spades");
/// assert_eq!(with_article(&Card::from_key(21)), "an 8 of Hearts");
/// assert_eq!(with_article(&Card::from_key(13)), "a King of Spades");
/// ```
pub fn with_article(card: &Card) -> String {
    let article = match card.rank {
        Rank::Ace | Rank::Eight => "an",
        _ => "a",
    };
    format!("{} {}", article, card)
}

/// Comma separated card names.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Total with a bust marker, e.g. "19" or "24 (bust)".
pub fn format_score(score: &Score) -> String {
    if score.is_bust() {
        format!("{} (bust)", score.total)
    } else {
        score.total.to_string()
    }
}
