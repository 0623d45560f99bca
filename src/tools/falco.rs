//! Rules validation via `falco -V`.

use std::ffi::OsStr;
use std::path::Path;

use crate::shell::run_combined;

use super::{RuleValidator, ValidationOutcome};

/// Default falco program, looked up on `PATH`.
pub const DEFAULT_FALCO: &str = "falco";

/// Validates rules with `falco -c <config> -V <rules>`.
#[derive(Debug, Clone)]
pub struct Falco {
    program: String,
}

impl Falco {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments for validating `rules` against `config`.
    pub fn validate_args<'a>(config: &'a Path, rules: &'a Path) -> [&'a OsStr; 4] {
        [
            OsStr::new("-c"),
            config.as_os_str(),
            OsStr::new("-V"),
            rules.as_os_str(),
        ]
    }
}

impl RuleValidator for Falco {
    fn validate(&self, config: &Path, rules: &Path) -> ValidationOutcome {
        match run_combined(&self.program, &Self::validate_args(config, rules)) {
            Ok(result) if result.success => ValidationOutcome::passed(result.output),
            Ok(result) => {
                let message = result.exit_description();
                ValidationOutcome::failed(result.output, message)
            }
            Err(e) => ValidationOutcome {
                output: String::new(),
                result: Err(e),
            },
        }
    }
}
