//! Run configuration and generated falco config.
//!
//! - [`paths`] - Well-known filesystem locations used by a run
//! - [`runtime`] - The plugin config handed to falco

pub mod paths;
pub mod runtime;

pub use paths::{ValidatorOptions, ValidatorPaths};
pub use runtime::{library_path_for, PluginEntry, RuntimeConfig};
