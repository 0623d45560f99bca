//! External program execution.

pub mod command;

pub use command::{run_combined, run_status, CommandResult};
