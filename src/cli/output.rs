//! Colored terminal output for the demo drivers
//!
//! Demo text goes to stdout, diagnostics to stderr. `colored` honors NO_COLOR
//! and CLICOLOR_FORCE; `--no-color` turns it off explicitly.

use colored::Colorize;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print a recovered demo failure (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print a result line with a green label, e.g. `Total size: 214 KB`
pub fn action(label: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

/// Print the opening banner of a pattern demo (cyan bold)
pub fn banner(pattern: &str) {
    println!("{}", banner_text(pattern).cyan().bold());
}

fn banner_text(pattern: &str) -> String {
    format!("=== {pattern} Pattern Demo ===")
}

/// Print a line nested under the current banner or label
pub fn detail(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("  {}", msg);
}

/// Print uncolored output such as rendered trees or TOML
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}
