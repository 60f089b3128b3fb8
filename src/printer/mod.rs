//! Console reporting: scenario banners and per-runtime output sections.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

pub struct Printer {
    color: bool,
}

impl Printer {
    /// Colorize only when stdout is a terminal.
    pub fn auto() -> Self {
        Self {
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Scenario banner: blank line, heading, then a `=` rule matching the
    /// heading's width.
    pub fn banner(&self, heading: &str) {
        if self.color {
            println!("\n{}", heading.cyan());
        } else {
            println!("\n{}", heading);
        }
        println!("{}", "=".repeat(heading.len()));
    }

    /// Labeled section holding one runtime's captured stdout.
    pub fn section(&self, label: &str, body: &str) {
        if self.color {
            println!("\n{}", format!("{} Output:", label).green());
        } else {
            println!("\n{} Output:", label);
        }
        println!("{}", body);
    }
}
