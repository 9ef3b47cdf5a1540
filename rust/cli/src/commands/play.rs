//! # Play Command
//!
//! Interactive blackjack session for one or more players against the dealer.
//!
//! Each round deals two cards to every player and two to the dealer (one face
//! down), then gives each player in turn the option to hit until they stand
//! or bust. The dealer then reveals and hits below 17, unless every player
//! has already busted. The session continues while the players answer yes to
//! "keep playing".
//!
//! Invalid answers are reported on stderr and the question is repeated. End
//! of input ends the session cleanly.

use crate::error::CliError;
use crate::formatters::{format_cards, format_score, with_article};
use crate::io_utils::prompt;
use crate::ui;
use crate::validation::{Answer, is_affirmative, parse_count, parse_yes_no, validate_count};
use blackjack_engine::deck::DeckConfig;
use blackjack_engine::engine::{DealerTurn, Engine};
use blackjack_engine::rules::DEALER_STANDS_ON;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

/// Most players a table seats.
pub const MAX_PLAYERS: u32 = 10;

/// Handle the play command: interactive blackjack session
///
/// # Arguments
///
/// * `players` - Number of players; prompted for when `None`
/// * `decks` - Number of decks in the shoe; prompted for when `None`
/// * `seed` - RNG seed for reproducibility (default: random)
/// * `out` - Output stream for game display
/// * `err` - Error stream for warnings and input errors
/// * `stdin` - Input stream for answers
///
/// # Returns
///
/// * `Ok(())` when the session ends, including on end of input
/// * `Err(CliError)` if a preset count is out of range or an I/O error occurs
///
/// # Examples
///
/// ```ignore
/// use std::io::Cursor;
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// // one player stands, then declines another round
/// let mut input = Cursor::new(b"n\nn\n");
/// handle_play_command(Some(1), Some(1), Some(42), &mut out, &mut err, &mut input).unwrap();
/// ```
pub fn handle_play_command(
    players: Option<u32>,
    decks: Option<u32>,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    writeln!(out, "Let's play a new game of blackjack!")?;

    let players = match players {
        Some(n) => validate_count(n, "players", MAX_PLAYERS).map_err(CliError::InvalidInput)?,
        None => match ask_count(
            stdin,
            out,
            err,
            "How many players do you want to play with? ",
            "players",
            MAX_PLAYERS,
        )? {
            Some(n) => n,
            None => return Ok(()),
        },
    };
    let decks = match decks {
        Some(n) => validate_count(n, "decks", u32::MAX).map_err(CliError::InvalidInput)?,
        None => match ask_count(
            stdin,
            out,
            err,
            "How many decks do you want to play with? ",
            "decks",
            u32::MAX,
        )? {
            Some(n) => n,
            None => return Ok(()),
        },
    };

    let max_decks = u32::from(DeckConfig::default().max_decks);
    if decks > max_decks {
        warn!(requested = decks, max = max_decks, "deck count clamped");
        ui::display_warning(
            err,
            &format!("Number of decks limited to {} in dealer shoe", max_decks),
        )?;
    }
    let decks = decks.min(max_decks) as u8;
    let seed = seed.unwrap_or_else(rand::random);
    info!(players, decks, seed, "starting session");

    writeln!(
        out,
        "play: players={} decks={} seed={}",
        players, decks, seed
    )?;
    writeln!(out, "Shuffling a new shoe of {} decks...", decks)?;

    let mut engine = Engine::new(players as usize, decks, seed)?;
    let mut rounds = 0u32;

    loop {
        rounds += 1;
        writeln!(out, "Round {}", rounds)?;
        if !play_round(&mut engine, stdin, out, err)? {
            break;
        }

        match prompt(stdin, out, "Would you like to keep playing? (y/n) ")? {
            Some(answer) if is_affirmative(&answer) => continue,
            _ => break,
        }
    }

    writeln!(out, "Rounds played: {}", rounds)?;
    Ok(())
}

/// Plays one round. Returns `false` when input ran out mid-round.
fn play_round(
    engine: &mut Engine,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<bool, CliError> {
    let reshuffles = engine.reshuffles();
    engine.start_round()?;
    if engine.reshuffles() != reshuffles {
        writeln!(out, "Reshuffling the shoe")?;
    }
    writeln!(
        out,
        "Dealer shows: {}",
        format_cards(engine.dealer().shown_cards())
    )?;

    for player in 0..engine.players().len() {
        writeln!(out, "Starting turn for player {}", player)?;
        writeln!(out, "Player {} is holding:", player)?;
        for card in engine.player(player)?.cards() {
            writeln!(out, "  {}", with_article(card))?;
        }
        writeln!(
            out,
            "Current score for player {} is {}",
            player,
            engine.player(player)?.score().total
        )?;

        let question = format!("Player {}, would you like a hit (y/n)? ", player);
        loop {
            match ask_yes_no(stdin, out, err, &question)? {
                Some(true) => {
                    let reshuffles = engine.reshuffles();
                    let (card, score) = engine.hit(player)?;
                    if engine.reshuffles() != reshuffles {
                        writeln!(out, "Reshuffling the shoe")?;
                    }
                    writeln!(out, "Player {} drew {}", player, with_article(&card))?;
                    writeln!(out, "{} cards remaining in deck", engine.deck_remaining())?;
                    if score.is_bust() {
                        writeln!(
                            out,
                            "Player {} busted with score of at least {}, ending turn",
                            player, score.total
                        )?;
                        break;
                    }
                    writeln!(
                        out,
                        "Current score for player {} is {}",
                        player, score.total
                    )?;
                }
                Some(false) => break,
                None => return Ok(false),
            }
        }
    }

    if !engine.any_player_alive() {
        writeln!(out, "All players busted. Dealer wins the round.")?;
        return Ok(true);
    }

    writeln!(out, "Starting dealer's turn")?;
    let reshuffles = engine.reshuffles();
    let turn = engine.play_dealer()?;
    write_dealer_turn(
        out,
        &turn,
        engine.reshuffles() != reshuffles,
        engine.deck_remaining(),
    )?;
    for (player, score, outcome) in engine.results() {
        writeln!(
            out,
            "Player {} score: {} ({})",
            player,
            format_score(&score),
            outcome.as_str()
        )?;
    }
    Ok(true)
}

/// Reports the dealer's turn. A reshuffle during the turn is announced before
/// any of the drawn cards.
fn write_dealer_turn(
    out: &mut dyn Write,
    turn: &DealerTurn,
    reshuffled: bool,
    remaining: usize,
) -> io::Result<()> {
    if let Some(hidden) = turn.hidden {
        writeln!(out, "Dealer reveals {}", with_article(&hidden))?;
    }
    if reshuffled {
        writeln!(out, "Reshuffling the shoe")?;
    }
    for card in &turn.drawn {
        writeln!(
            out,
            "Dealer score is below {}. Dealer hits: {}",
            DEALER_STANDS_ON, card
        )?;
    }
    if !turn.drawn.is_empty() {
        writeln!(out, "{} cards remaining in deck", remaining)?;
    }
    if turn.score.is_bust() {
        writeln!(out, "Dealer busted with score of {}!", turn.score.total)?;
    } else {
        writeln!(out, "Dealer score is {}", turn.score.total)?;
    }
    Ok(())
}

/// Asks for a count until a valid one is entered. `None` on end of input.
fn ask_count(
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
    question: &str,
    what: &str,
    max: u32,
) -> Result<Option<u32>, CliError> {
    while let Some(answer) = prompt(stdin, out, question)? {
        match parse_count(&answer, what, max) {
            Ok(n) => return Ok(Some(n)),
            Err(msg) => ui::write_error(err, &msg)?,
        }
    }
    Ok(None)
}

/// Asks a y/n question until answered. `None` on end of input.
fn ask_yes_no(
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
    question: &str,
) -> Result<Option<bool>, CliError> {
    while let Some(answer) = prompt(stdin, out, question)? {
        match parse_yes_no(&answer) {
            Answer::Yes => return Ok(Some(true)),
            Answer::No => return Ok(Some(false)),
            Answer::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
    Ok(None)
}
