//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`run`] - The validate command
//! - [`version`] - Build metadata banner

pub mod args;
pub mod run;
pub mod version;

pub use args::{collect_inputs, parse_bool_like, use_stable_rules, Cli, ENV_RULES, ENV_STABLE};
pub use run::{RunCommand, USAGE};
pub use version::version_banner;
