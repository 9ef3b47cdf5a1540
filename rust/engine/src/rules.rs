use crate::hand::Score;

/// Highest total that does not bust.
pub const BLACKJACK: u32 = 21;

/// The dealer stands on any total at or above this value.
pub const DEALER_STANDS_ON: u32 = 17;

/// Fixed dealer policy: hit below 17, stand otherwise.
pub fn dealer_should_hit(score: Score) -> bool {
    score.total < DEALER_STANDS_ON
}

/// Result of one player's hand against the dealer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Outcome {
    Win,
    Lose,
    Push,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Push => "push",
        }
    }
}

/// Settles a player against the dealer. A busted player loses even if the
/// dealer also busts.
pub fn settle(player: Score, dealer: Score) -> Outcome {
    if player.is_bust() {
        Outcome::Lose
    } else if dealer.is_bust() || player.total > dealer.total {
        Outcome::Win
    } else if player.total < dealer.total {
        Outcome::Lose
    } else {
        Outcome::Push
    }
}
