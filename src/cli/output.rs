//! Terminal error/hint helpers for the entry point.
//!
//! Everything here goes to stderr so it never mixes with emitted output on
//! stdout. `console` handles NO_COLOR and non-tty detection.

use console::style;

/// Print a fatal error message.
///
/// Example: `✗ the path is not specified`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a follow-up hint.
///
/// Example: `→ pass at least one ssm-path`
pub fn hint(msg: &str) {
    eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
}
