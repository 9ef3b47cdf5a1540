//! Line-oriented console input.
//!
//! Every interactive question goes through [`prompt`], which takes its input
//! and output streams as parameters so sessions can be scripted in tests.

use std::io::{BufRead, Write};

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Trims whitespace from the input and returns `None` on EOF or read errors.
///
/// # Example
///
/// ```rust,no_run
/// use std::io::{self, BufRead};
/// # use blackjack_cli::io_utils::read_stdin_line;
///
/// let stdin = io::stdin();
/// let mut handle = stdin.lock();
/// if let Some(line) = read_stdin_line(&mut handle) {
///     println!("You entered: {}", line);
/// }
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Writes `question` without a trailing newline, flushes, and reads the
/// answer.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use blackjack_cli::io_utils::prompt;
///
/// let mut input = Cursor::new(b"y\n");
/// let mut out = Vec::new();
/// let answer = prompt(&mut input, &mut out, "Hit (y/n)? ").unwrap();
/// assert_eq!(answer.as_deref(), Some("y"));
/// assert_eq!(out, b"Hit (y/n)? ");
/// ```
pub fn prompt(
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    question: &str,
) -> std::io::Result<Option<String>> {
    write!(out, "{}", question)?;
    out.flush()?;
    Ok(read_stdin_line(stdin))
}
