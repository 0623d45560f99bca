//! Validation run orchestration.
//!
//! - [`validator`] - Sequences resolution, config generation, combining and validation
//! - [`cleanup`] - Guarantees generated files are removed

pub mod cleanup;
pub mod validator;

pub use cleanup::TempArtifacts;
pub use validator::{FalcoValidator, RunReport};
