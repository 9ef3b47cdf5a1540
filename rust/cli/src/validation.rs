//! Input parsing and validation for the interactive prompts.
//!
//! Parsers return structured results so the caller can report the message
//! and ask again instead of failing the session.

/// Outcome of parsing a yes/no answer.
#[derive(Debug, PartialEq)]
pub enum Answer {
    Yes,
    No,
    /// Unrecognized input with error message
    Invalid(String),
}

/// Parse a yes/no answer (case-insensitive): "y"/"yes" or "n"/"no".
///
/// # Example
///
/// ```rust
/// # use blackjack_cli::validation::{parse_yes_no, Answer};
/// assert_eq!(parse_yes_no("Y"), Answer::Yes);
/// assert_eq!(parse_yes_no("no"), Answer::No);
/// assert!(matches!(parse_yes_no("maybe"), Answer::Invalid(_)));
/// ```
pub fn parse_yes_no(input: &str) -> Answer {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Answer::Yes,
        "n" | "no" => Answer::No,
        "" => Answer::Invalid("Empty input; answer y or n".to_string()),
        other => Answer::Invalid(format!("Unrecognized answer '{}'; answer y or n", other)),
    }
}

/// Whether `input` is the affirmative token. Anything else, including
/// unrecognized text, counts as no.
pub fn is_affirmative(input: &str) -> bool {
    parse_yes_no(input) == Answer::Yes
}

/// Parse a count in `1..=max`.
///
/// # Example
///
/// ```rust
/// # use blackjack_cli::validation::parse_count;
/// assert_eq!(parse_count("3", "players", 10), Ok(3));
/// assert!(parse_count("0", "players", 10).is_err());
/// assert!(parse_count("three", "players", 10).is_err());
/// assert!(parse_count("11", "players", 10).is_err());
/// ```
pub fn parse_count(input: &str, what: &str, max: u32) -> Result<u32, String> {
    let n: u32 = input
        .trim()
        .parse()
        .map_err(|_| format!("Number of {} must be a whole number", what))?;
    validate_count(n, what, max)
}

/// Check that a count is in `1..=max`.
pub fn validate_count(n: u32, what: &str, max: u32) -> Result<u32, String> {
    if n == 0 {
        return Err(format!("Number of {} must be >= 1", what));
    }
    if n > max {
        return Err(format!("Number of {} must be <= {}", what, max));
    }
    Ok(n)
}
