//! The two external programs a run depends on.
//!
//! Each program sits behind a one-method trait so the pipeline can be
//! driven by test doubles:
//!
//! - [`ArtifactInstaller`] - installs a named artifact into the rules directory
//! - [`RuleValidator`] - validates a combined rules document against a config
//!
//! [`Falcoctl`] and [`Falco`] are the real implementations.

pub mod falco;
pub mod falcoctl;

pub use falco::Falco;
pub use falcoctl::Falcoctl;

use std::path::Path;

use crate::error::Result;

/// Installs artifacts (rules bundles) by reference.
pub trait ArtifactInstaller {
    /// Install `artifact` so its rules files land in `target_dir`.
    fn install(&self, artifact: &str, target_dir: &Path) -> Result<()>;
}

/// Validates rules against a falco config.
pub trait RuleValidator {
    /// Validate the rules at `rules` using the config at `config`.
    fn validate(&self, config: &Path, rules: &Path) -> ValidationOutcome;
}

/// What a validator reported.
///
/// The output is kept alongside the result because it matters most when
/// validation fails.
#[derive(Debug)]
pub struct ValidationOutcome {
    /// Combined stdout and stderr of the validator.
    pub output: String,
    /// `Err(ValidationFailure)` when the rules were rejected.
    pub result: Result<()>,
}

impl ValidationOutcome {
    pub fn passed(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            result: Ok(()),
        }
    }

    pub fn failed(output: impl Into<String>, message: impl Into<String>) -> Self {
        let output = output.into();
        Self {
            result: Err(crate::error::ValidatorError::ValidationFailure {
                message: message.into(),
                output: output.clone(),
            }),
            output,
        }
    }

    /// Whether the validator accepted the rules.
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}
