use tracing::{debug, warn};

use crate::cards::{Card, CardKey};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{DealerHand, Hand, Score};
use crate::rules::{dealer_should_hit, settle, Outcome};

/// Cards reserved per seat when deciding whether to reshuffle before a round.
const CARDS_PER_SEAT: usize = 5;

/// Cards the dealer drew on their turn and where they ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerTurn {
    /// The face-down card, now revealed
    pub hidden: Option<Card>,
    /// Cards drawn while below the stand threshold, in order
    pub drawn: Vec<Card>,
    /// Final total including the hidden card
    pub score: Score,
}

/// Round orchestration for a table of players against one dealer.
/// Owns the shoe and every hand for the whole session.
///
/// # Examples
///
/// ```
/// use blackjack_engine::engine::Engine;
///
/// let mut engine = Engine::new(2, 1, 7).unwrap();
/// engine.start_round().unwrap();
/// assert_eq!(engine.players()[0].cards().len(), 2);
/// assert!(engine.dealer().hidden_card().is_some());
///
/// let turn = engine.play_dealer().unwrap();
/// assert!(turn.score.total >= 17);
/// ```
#[derive(Debug)]
pub struct Engine {
    deck: Deck,
    players: Vec<Hand>,
    dealer: DealerHand,
    reshuffles: u32,
}

impl Engine {
    pub fn new(num_players: usize, num_decks: u8, seed: u64) -> Result<Self, GameError> {
        if num_players == 0 {
            return Err(GameError::NoPlayers);
        }
        Ok(Self::with_deck(num_players, Deck::new_with_seed(num_decks, seed)))
    }

    fn with_deck(num_players: usize, deck: Deck) -> Self {
        Self {
            deck,
            players: (0..num_players).map(Hand::new).collect(),
            // dealer sits after every player
            dealer: DealerHand::new(num_players + 1),
            reshuffles: 0,
        }
    }

    pub fn players(&self) -> &[Hand] {
        &self.players
    }

    pub fn player(&self, player: usize) -> Result<&Hand, GameError> {
        self.players.get(player).ok_or(GameError::UnknownPlayer {
            player,
            players: self.players.len(),
        })
    }

    pub fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    pub fn num_decks(&self) -> u8 {
        self.deck.num_decks()
    }

    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Number of times the shoe has been reshuffled this session.
    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    pub fn reshuffle(&mut self) {
        self.deck.reshuffle();
        self.reshuffles += 1;
    }

    /// Whether the shoe is too thin to start another round.
    pub fn needs_reshuffle(&self) -> bool {
        self.deck.remaining() < (self.players.len() + 1) * CARDS_PER_SEAT
    }

    /// Draws one key. An exhausted shoe is reshuffled and the draw retried
    /// once.
    pub fn draw(&mut self) -> Result<CardKey, GameError> {
        match self.deck.draw() {
            Err(GameError::EmptyDeck) => {
                warn!("shoe exhausted mid-round, reshuffling");
                self.reshuffle();
                self.deck.draw()
            }
            other => other,
        }
    }

    /// Clears every hand and deals a fresh round: two passes of one card to
    /// each player, then the dealer's face-down and face-up cards.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        if self.needs_reshuffle() {
            self.reshuffle();
        }
        for hand in &mut self.players {
            hand.clear();
        }
        self.dealer.clear();

        for _ in 0..2 {
            for i in 0..self.players.len() {
                let key = self.draw()?;
                self.players[i].add_card(key);
            }
        }
        let hidden = self.draw()?;
        self.dealer.add_hidden_card(hidden)?;
        let up = self.draw()?;
        self.dealer.add_card(up);
        debug!(
            players = self.players.len(),
            remaining = self.deck.remaining(),
            "dealt round"
        );
        Ok(())
    }

    /// Deals one more card to `player` and returns it with the new score.
    pub fn hit(&mut self, player: usize) -> Result<(Card, Score), GameError> {
        self.player(player)?;
        let key = self.draw()?;
        let hand = &mut self.players[player];
        let card = hand.add_card(key);
        Ok((card, hand.score()))
    }

    /// True while at least one player has not busted.
    pub fn any_player_alive(&self) -> bool {
        self.players.iter().any(|h| !h.score().is_bust())
    }

    /// Reveals the hidden card and draws until the dealer reaches 17 or more.
    pub fn play_dealer(&mut self) -> Result<DealerTurn, GameError> {
        let hidden = self.dealer.reveal();
        let mut drawn = Vec::new();
        let mut score = self.dealer.total_score();
        while dealer_should_hit(score) {
            let key = self.draw()?;
            drawn.push(self.dealer.add_card(key));
            score = self.dealer.total_score();
        }
        debug!(total = score.total, bust = score.is_bust(), "dealer stands");
        Ok(DealerTurn {
            hidden,
            drawn,
            score,
        })
    }

    /// Each player's score and outcome against the dealer's current total.
    pub fn results(&self) -> Vec<(usize, Score, Outcome)> {
        let dealer = self.dealer.total_score();
        self.players
            .iter()
            .map(|h| {
                let score = h.score();
                (h.player_id(), score, settle(score, dealer))
            })
            .collect()
    }
}
