//! falco-validator - Validate Falco rules in one command.
//!
//! Takes a mix of rules files and artifact references, installs the
//! artifacts with falcoctl, generates a falco config loading every plugin
//! the rules require, concatenates the rules and runs `falco -V` on them.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Filesystem locations and the generated falco config
//! - [`error`] - Error types and result aliases
//! - [`pipeline`] - Orchestration of a validation run
//! - [`rules`] - Input resolution, dependency extraction and combining
//! - [`shell`] - External program execution
//! - [`tools`] - falcoctl and falco behind mockable traits
//! - [`ui`] - Progress and error output
//!
//! # Example
//!
//! ```
//! use falco_validator::config::RuntimeConfig;
//! use falco_validator::rules::PluginDependency;
//!
//! let config = RuntimeConfig::from_dependencies(&[PluginDependency::new("json", "0.1.0")]);
//! assert_eq!(config.plugins[0].library_path, "libjson.so");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod rules;
pub mod shell;
pub mod tools;
pub mod ui;

pub use error::{Result, ValidatorError};
