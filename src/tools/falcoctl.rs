//! Artifact installation via `falcoctl`.

use std::path::Path;

use crate::error::{Result, ValidatorError};
use crate::shell::run_status;

use super::ArtifactInstaller;

/// Default falcoctl program, looked up on `PATH`.
pub const DEFAULT_FALCOCTL: &str = "falcoctl";

/// Installs artifacts with `falcoctl artifact install`.
#[derive(Debug, Clone)]
pub struct Falcoctl {
    program: String,
}

impl Falcoctl {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments for installing `artifact` into `target_dir`.
    pub fn install_args(artifact: &str, target_dir: &Path) -> Vec<String> {
        vec![
            "artifact".to_string(),
            "install".to_string(),
            artifact.to_string(),
            format!("--rulesfiles-dir={}", target_dir.display()),
        ]
    }
}

impl ArtifactInstaller for Falcoctl {
    fn install(&self, artifact: &str, target_dir: &Path) -> Result<()> {
        let args = Self::install_args(artifact, target_dir);
        let result = run_status(&self.program, &args).map_err(|e| {
            ValidatorError::ArtifactInstall {
                artifact: artifact.to_string(),
                message: e.to_string(),
            }
        })?;

        if result.success {
            tracing::debug!("Installed {} in {:?}", artifact, result.duration);
            Ok(())
        } else {
            Err(ValidatorError::ArtifactInstall {
                artifact: artifact.to_string(),
                message: format!("{} {}", self.program, result.exit_description()),
            })
        }
    }
}
