//! Output formatting utilities

use console::{style, Style};

use tollgate_core::BumpLevel;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", style("→").blue(), message);
}

/// Create a styled header
pub fn header(text: &str) -> String {
    style(text).bold().to_string()
}

/// Create a styled key-value line
pub fn key_value(key: &str, value: &str) -> String {
    format!("  {}: {}", style(key).dim(), value)
}

/// Style for bump levels, louder the bigger the bump
pub fn bump_style(level: BumpLevel) -> Style {
    match level {
        BumpLevel::Major => Style::new().red().bold(),
        BumpLevel::Minor => Style::new().yellow().bold(),
        BumpLevel::Patch => Style::new().green(),
        BumpLevel::None => Style::new().dim(),
    }
}

/// Style for paths
pub fn path_style() -> Style {
    Style::new().cyan()
}
