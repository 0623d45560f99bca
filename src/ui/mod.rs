//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`ConsoleUI`] for terminal and CI output
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use falco_validator::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Processing inputs...");
//! ui.success("Validation successful!");
//! assert!(ui.has_message("Processing"));
//! ```

pub mod mock;
pub mod output;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use terminal::ConsoleUI;
pub use theme::{should_use_colors, ValidatorTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a progress message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Display output captured from an external program.
    ///
    /// Shown in every output mode.
    fn program_output(&mut self, output: &str);
}
