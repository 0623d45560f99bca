//! The validate command.

use crate::error::{Result, ValidatorError};
use crate::pipeline::FalcoValidator;
use crate::tools::{Falco, Falcoctl};
use crate::ui::UserInterface;

use super::Cli;

/// Usage line shown when there is nothing to validate.
pub const USAGE: &str = "usage: falco-validator [flags] <artifact|file> [artifact|file ...]";

/// Validate everything the command line and environment ask for.
pub struct RunCommand {
    inputs: Vec<String>,
    validator: FalcoValidator,
}

impl RunCommand {
    /// Build the command from parsed arguments and the environment.
    pub fn from_cli(cli: &Cli) -> Self {
        let validator = FalcoValidator::with_tools(
            cli.options(),
            Box::new(Falcoctl::new(cli.falcoctl.clone())),
            Box::new(Falco::new(cli.falco.clone())),
        );
        Self::new(cli.all_inputs(), validator)
    }

    pub fn new(inputs: Vec<String>, validator: FalcoValidator) -> Self {
        Self { inputs, validator }
    }

    /// Run validation.
    ///
    /// Without inputs the only thing worth validating is the stable
    /// ruleset; with neither this is a usage error.
    pub fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        if self.inputs.is_empty() && !self.validator.options().use_stable_rules {
            return Err(ValidatorError::Usage {
                message: USAGE.to_string(),
            });
        }

        tracing::debug!("Validating inputs: {:?}", self.inputs);
        let report = self.validator.run(&self.inputs, ui)?;
        tracing::debug!(
            "Validated {} rules files with {} plugins",
            report.rules_files.len(),
            report.plugins.len()
        );

        ui.success("Validation successful!");
        Ok(())
    }
}
