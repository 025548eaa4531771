//! Console output helpers.
//!
//! Diagnostics go to stderr; stdout carries only the success message, so the
//! command stays pipe-friendly. Colors respect NO_COLOR.

use console::style;

/// Print the success message to stdout (green checkmark).
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error to stderr (red cross).
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a warning to stderr (yellow).
pub fn warn(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow(), msg);
}

/// Print a hint to stderr (cyan arrow).
pub fn hint(msg: &str) {
    eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
}
