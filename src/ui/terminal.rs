//! Terminal UI.

use super::{should_use_colors, OutputMode, UserInterface, ValidatorTheme};

/// Writes progress and program output to stdout, errors to stderr.
pub struct ConsoleUI {
    theme: ValidatorTheme,
    mode: OutputMode,
}

impl ConsoleUI {
    /// Create a console UI, picking colors from the terminal.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            ValidatorTheme::new()
        } else {
            ValidatorTheme::plain()
        };

        Self { theme, mode }
    }

    /// Create with an explicit theme (for testing).
    pub fn with_theme(mode: OutputMode, theme: ValidatorTheme) -> Self {
        Self { theme, mode }
    }
}

impl UserInterface for ConsoleUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn program_output(&mut self, output: &str) {
        println!("{}", output);
    }
}
