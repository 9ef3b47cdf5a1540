use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck is empty; reshuffle before drawing")]
    EmptyDeck,
    #[error("Unknown player {player} (table has {players} players)")]
    UnknownPlayer { player: usize, players: usize },
    #[error("At least one player is required")]
    NoPlayers,
    #[error("Dealer already holds a face down card")]
    HiddenCardOccupied,
}
