//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::{ColoredString, Colorize};

use crate::domain::{BoardHistory, Outcome};

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print completed action (green label)
pub fn action(label: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print indented detail (no color)
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print plain output (no color, for data such as JSON)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// Letter painted with the background of its outcome.
pub fn letter(letter: char, outcome: Outcome) -> ColoredString {
    let text = letter.to_string();
    match outcome {
        Outcome::Hit => text.black().on_green(),
        Outcome::Near => text.black().on_yellow(),
        Outcome::Miss => text.normal(),
    }
}

/// One grid row: colored letters followed by the raw outcome string.
pub fn row_line(guess: &str, result: &str) -> String {
    let letters: String = guess
        .chars()
        .zip(result.chars())
        .map(|(g, r)| letter(g, Outcome::from_symbol(r).unwrap_or(Outcome::Miss)).to_string())
        .collect();
    format!("{}  [{}]", letters, result)
}

/// Print all rows of one board under a header.
pub fn board(index: usize, history: &BoardHistory) {
    header(&format!("board {} ({} guesses)", index, history.len()));
    for (guess, result) in history.rows() {
        detail(&row_line(guess, result));
    }
}
