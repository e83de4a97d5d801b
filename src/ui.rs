//! Terminal status output
//!
//! Small fixed palette of semantic colors. Color is applied only when the
//! destination stream is a terminal, so piped output stays plain.

use crossterm::style::{Color, Stylize};
use is_terminal::IsTerminal;

/// Semantic colors used across the CLI.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

fn paint(text: &str, color: Color, tty: bool) -> String {
    if tty {
        format!("{}", text.with(color))
    } else {
        text.to_string()
    }
}

/// Green status line on stdout (task start/completion messages).
pub fn success(text: &str) {
    println!(
        "{}",
        paint(text, colors::SUCCESS, std::io::stdout().is_terminal())
    );
}

/// Cyan informational line on stdout.
pub fn info(text: &str) {
    println!(
        "{}",
        paint(text, colors::INFO, std::io::stdout().is_terminal())
    );
}

/// Red error line on stderr.
pub fn error(text: &str) {
    eprintln!(
        "{}",
        paint(text, colors::ERROR, std::io::stderr().is_terminal())
    );
}

/// De-emphasized text, returned rather than printed so callers can compose.
pub fn dim(text: &str) -> String {
    paint(text, colors::DIM, std::io::stdout().is_terminal())
}
