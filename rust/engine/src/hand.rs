use crate::cards::{Card, CardKey, Rank};
use crate::errors::GameError;
use crate::rules::BLACKJACK;

/// Result of scoring a set of cards.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Score {
    /// Best total found. For a busted hand this is the all-aces-low total,
    /// a lower bound.
    pub total: u32,
    busted: bool,
}

impl Score {
    pub fn is_bust(&self) -> bool {
        self.busted
    }
}

/// Scores cards with soft aces.
///
/// Face cards count 10, aces count 1, and while the total stays at or below
/// 11 one ace at a time is promoted to 11. A total above 21 before promotion
/// is a bust and no promotion is attempted.
///
/// # Examples
///
/// ```
/// use blackjack_engine::cards::Card;
/// use blackjack_engine::hand::score_cards;
///
/// // Ace of Spades, King of Spades
/// let score = score_cards(&[Card::from_key(1), Card::from_key(13)]);
/// assert_eq!(score.total, 21);
/// assert!(!score.is_bust());
/// ```
pub fn score_cards<'a, I>(cards: I) -> Score
where
    I: IntoIterator<Item = &'a Card>,
{
    let mut total = 0u32;
    let mut aces = 0u32;
    for card in cards {
        match card.rank {
            Rank::Ace => aces += 1,
            r if r.is_face() => total += 10,
            r => total += u32::from(r.number()),
        }
    }
    total += aces;

    if total > BLACKJACK {
        return Score {
            total,
            busted: true,
        };
    }
    while total <= 11 && aces > 0 {
        total += 10;
        aces -= 1;
    }
    Score {
        total,
        busted: false,
    }
}

/// Cards held by one player, in the order they were dealt.
#[derive(Debug, Clone)]
pub struct Hand {
    player_id: usize,
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(player_id: usize) -> Self {
        Self {
            player_id,
            cards: Vec::new(),
        }
    }

    pub fn player_id(&self) -> usize {
        self.player_id
    }

    /// Adds the card for `key` and returns it.
    pub fn add_card(&mut self, key: CardKey) -> Card {
        let card = Card::from_key(key);
        self.cards.push(card);
        card
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn score(&self) -> Score {
        score_cards(&self.cards)
    }
}

/// The dealer's hand: face-up cards plus at most one face-down card.
///
/// The face-down card counts toward [`DealerHand::total_score`] but not
/// toward [`DealerHand::shown_score`]. Revealing it only changes what may
/// be displayed.
#[derive(Debug, Clone)]
pub struct DealerHand {
    shown: Hand,
    hidden: Option<Card>,
    revealed: bool,
}

impl DealerHand {
    pub fn new(player_id: usize) -> Self {
        Self {
            shown: Hand::new(player_id),
            hidden: None,
            revealed: false,
        }
    }

    pub fn player_id(&self) -> usize {
        self.shown.player_id()
    }

    pub fn add_card(&mut self, key: CardKey) -> Card {
        self.shown.add_card(key)
    }

    pub fn add_hidden_card(&mut self, key: CardKey) -> Result<Card, GameError> {
        if self.hidden.is_some() {
            return Err(GameError::HiddenCardOccupied);
        }
        let card = Card::from_key(key);
        self.hidden = Some(card);
        Ok(card)
    }

    /// Face-up cards, excluding the hidden card.
    pub fn shown_cards(&self) -> &[Card] {
        self.shown.cards()
    }

    pub fn hidden_card(&self) -> Option<Card> {
        self.hidden
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Turns the hidden card face up and returns it.
    pub fn reveal(&mut self) -> Option<Card> {
        if self.hidden.is_some() {
            self.revealed = true;
        }
        self.hidden
    }

    /// Score visible to the players.
    pub fn shown_score(&self) -> Score {
        self.shown.score()
    }

    /// Score including the hidden card, scored as if dealt first.
    pub fn total_score(&self) -> Score {
        score_cards(self.hidden.iter().chain(self.shown.cards()))
    }

    pub fn clear(&mut self) {
        self.shown.clear();
        self.hidden = None;
        self.revealed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Spades keys: Ace = 1, 2..10 = 2..10, Jack = 11, Queen = 12, King = 13
    fn hand_of(keys: &[CardKey]) -> Hand {
        let mut hand = Hand::new(0);
        for &k in keys {
            hand.add_card(k);
        }
        hand
    }

    #[test]
    fn ace_king_is_21() {
        let score = hand_of(&[1, 13]).score();
        assert_eq!(score.total, 21);
        assert!(!score.is_bust());
    }

    #[test]
    fn two_aces_promote_only_one() {
        assert_eq!(hand_of(&[1, 14]).score().total, 12);
    }

    #[test]
    fn three_aces_score_13() {
        assert_eq!(hand_of(&[1, 14, 27]).score().total, 13);
    }

    #[test]
    fn ten_nine_five_busts() {
        let score = hand_of(&[10, 9, 5]).score();
        assert_eq!(score.total, 24);
        assert!(score.is_bust());
    }

    #[test]
    fn pair_of_sevens_is_14() {
        assert_eq!(hand_of(&[7, 20]).score().total, 14);
    }

    #[test]
    fn score_is_idempotent() {
        let hand = hand_of(&[1, 6]);
        assert_eq!(hand.score(), hand.score());
        assert_eq!(hand.score().total, 17);
    }

    #[test]
    fn face_cards_count_ten() {
        assert_eq!(hand_of(&[11, 12]).score().total, 20);
    }

    #[test]
    fn empty_hand_scores_zero() {
        let hand = Hand::new(3);
        assert!(hand.is_empty());
        assert_eq!(hand.score().total, 0);
    }

    #[test]
    fn clear_empties_hand() {
        let mut hand = hand_of(&[1, 2, 3]);
        hand.clear();
        assert!(hand.cards().is_empty());
        assert_eq!(hand.player_id(), 0);
    }

    #[test]
    fn dealer_hidden_ace_with_king_is_21() {
        let mut dealer = DealerHand::new(5);
        dealer.add_hidden_card(1).unwrap();
        dealer.add_card(13);
        assert_eq!(dealer.total_score().total, 21);
        assert_eq!(dealer.shown_score().total, 10);
    }

    #[test]
    fn dealer_hidden_ten_nine_five_busts() {
        let mut dealer = DealerHand::new(5);
        dealer.add_hidden_card(10).unwrap();
        dealer.add_card(9);
        dealer.add_card(5);
        let total = dealer.total_score();
        assert_eq!(total.total, 24);
        assert!(total.is_bust());
    }

    #[test]
    fn dealer_reveal_does_not_change_score() {
        let mut dealer = DealerHand::new(5);
        dealer.add_hidden_card(7).unwrap();
        dealer.add_card(8);
        let before = dealer.total_score();
        assert!(!dealer.is_revealed());
        assert_eq!(dealer.reveal(), Some(Card::from_key(7)));
        assert!(dealer.is_revealed());
        assert_eq!(dealer.total_score(), before);
    }

    #[test]
    fn dealer_holds_at_most_one_hidden_card() {
        let mut dealer = DealerHand::new(5);
        dealer.add_hidden_card(2).unwrap();
        assert_eq!(dealer.add_hidden_card(3), Err(GameError::HiddenCardOccupied));
        dealer.clear();
        assert_eq!(dealer.hidden_card(), None);
        assert!(dealer.add_hidden_card(3).is_ok());
    }

    #[test]
    fn dealer_without_hidden_card_scores_shown_cards() {
        let mut dealer = DealerHand::new(1);
        dealer.add_card(1);
        assert_eq!(dealer.total_score(), dealer.shown_score());
        assert_eq!(dealer.reveal(), None);
        assert!(!dealer.is_revealed());
    }
}
