//! The validation run.
//!
//! A run resolves its inputs into rules files, collects the plugins those
//! files require, writes a falco config loading those plugins, concatenates
//! the rules files and hands both to the validator. Any stage failure ends
//! the run; generated files are removed either way.

use std::path::PathBuf;

use crate::config::{RuntimeConfig, ValidatorOptions};
use crate::error::Result;
use crate::rules::{
    combine_rules_files, extract_plugin_dependencies, resolve_inputs, PluginDependency,
};
use crate::tools::{ArtifactInstaller, RuleValidator};
use crate::ui::UserInterface;

use super::TempArtifacts;

/// What a successful run saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Resolved rules files, in combine order.
    pub rules_files: Vec<PathBuf>,
    /// Deduplicated plugins written to the config.
    pub plugins: Vec<PluginDependency>,
}

/// Runs validation for a set of inputs.
pub struct FalcoValidator {
    options: ValidatorOptions,
    installer: Box<dyn ArtifactInstaller>,
    validator: Box<dyn RuleValidator>,
}

impl FalcoValidator {
    /// Create a validator with explicit external tools.
    pub fn with_tools(
        options: ValidatorOptions,
        installer: Box<dyn ArtifactInstaller>,
        validator: Box<dyn RuleValidator>,
    ) -> Self {
        Self {
            options,
            installer,
            validator,
        }
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Run the whole pipeline for `inputs`.
    ///
    /// Validator output is shown through `ui` whenever there is any, before
    /// a validation failure is returned.
    pub fn run(&self, inputs: &[String], ui: &mut dyn UserInterface) -> Result<RunReport> {
        let paths = &self.options.paths;

        ui.message("Processing inputs...");
        let rules_files = resolve_inputs(inputs, &self.options, self.installer.as_ref())?;
        ui.message(&format!("Found {} rules files", rules_files.len()));

        ui.message("Extracting plugin dependencies...");
        let plugins = extract_plugin_dependencies(&rules_files)?;
        ui.message(&format!("Found {} required plugins", plugins.len()));
        for plugin in &plugins {
            ui.message(&format!("  - {}@{}", plugin.name, plugin.version));
        }

        let mut artifacts = TempArtifacts::new();

        ui.message(&format!(
            "Generating falco config at {}",
            paths.config_output.display()
        ));
        artifacts.track(&paths.config_output);
        RuntimeConfig::from_dependencies(&plugins).write_to(&paths.config_output)?;

        ui.message(&format!(
            "Combining rules files into {}",
            paths.rules_output.display()
        ));
        artifacts.track(&paths.rules_output);
        let bytes = combine_rules_files(&rules_files, &paths.rules_output, ui)?;
        tracing::debug!("Combined {} bytes of rules", bytes);

        ui.message("Running falco validation...");
        let outcome = self
            .validator
            .validate(&paths.config_output, &paths.rules_output);
        if !outcome.output.is_empty() {
            ui.program_output(&outcome.output);
        }
        outcome.result?;

        Ok(RunReport {
            rules_files,
            plugins,
        })
    }
}
