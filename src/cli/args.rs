//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. Location and program
//! overrides are hidden from `--help`; they exist so CI images with a
//! non-standard falco layout can still use the tool.

use clap::Parser;
use std::path::PathBuf;

use crate::config::paths::{
    DEFAULT_CONFIG_OUTPUT, DEFAULT_RULES_DIR, DEFAULT_RULES_OUTPUT, DEFAULT_STABLE_RULES,
};
use crate::config::{ValidatorOptions, ValidatorPaths};
use crate::tools::falco::DEFAULT_FALCO;
use crate::tools::falcoctl::DEFAULT_FALCOCTL;

/// Env var carrying extra whitespace-separated inputs.
pub const ENV_RULES: &str = "FALCO_VALIDATOR_RULES";

/// Env var enabling the stable ruleset when `--stable` is not given.
pub const ENV_STABLE: &str = "FALCO_VALIDATOR_STABLE";

/// Validate Falco rules files and artifacts.
#[derive(Debug, Parser)]
#[command(name = "falco-validator")]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Artifact references or rules files to validate
    #[arg(value_name = "ARTIFACT|FILE")]
    pub inputs: Vec<String>,

    /// Inject Falco stable ruleset
    #[arg(long)]
    pub stable: bool,

    /// Print version information
    #[arg(long)]
    pub version: bool,

    /// Only show errors and falco output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Directory installed rules files are read from
    #[arg(long, env = "FALCO_VALIDATOR_RULES_DIR", default_value = DEFAULT_RULES_DIR, hide = true)]
    pub rules_dir: PathBuf,

    /// Stable ruleset injected by --stable
    #[arg(long, env = "FALCO_VALIDATOR_STABLE_RULES", default_value = DEFAULT_STABLE_RULES, hide = true)]
    pub stable_rules: PathBuf,

    /// Where the generated falco config is written
    #[arg(long, env = "FALCO_VALIDATOR_CONFIG_OUTPUT", default_value = DEFAULT_CONFIG_OUTPUT, hide = true)]
    pub config_output: PathBuf,

    /// Where the combined rules file is written
    #[arg(long, env = "FALCO_VALIDATOR_RULES_OUTPUT", default_value = DEFAULT_RULES_OUTPUT, hide = true)]
    pub rules_output: PathBuf,

    /// falcoctl program
    #[arg(long, env = "FALCOCTL_BIN", default_value = DEFAULT_FALCOCTL, hide = true)]
    pub falcoctl: String,

    /// falco program
    #[arg(long, env = "FALCO_BIN", default_value = DEFAULT_FALCO, hide = true)]
    pub falco: String,
}

impl Cli {
    /// Inputs from the environment followed by the positional arguments.
    pub fn all_inputs(&self) -> Vec<String> {
        collect_inputs(std::env::var(ENV_RULES).ok().as_deref(), &self.inputs)
    }

    /// Whether to inject the stable ruleset, consulting the environment
    /// only when `--stable` was not given.
    pub fn use_stable_rules(&self) -> bool {
        use_stable_rules(self.stable, std::env::var(ENV_STABLE).ok().as_deref())
    }

    /// Run options built from the flags and the environment.
    pub fn options(&self) -> ValidatorOptions {
        ValidatorOptions::new(
            self.use_stable_rules(),
            ValidatorPaths {
                rules_dir: self.rules_dir.clone(),
                stable_rules: self.stable_rules.clone(),
                config_output: self.config_output.clone(),
                rules_output: self.rules_output.clone(),
            },
        )
    }
}

/// Env inputs (split on whitespace) first, then CLI inputs.
pub fn collect_inputs(env_value: Option<&str>, cli_inputs: &[String]) -> Vec<String> {
    env_value
        .unwrap_or_default()
        .split_whitespace()
        .map(str::to_string)
        .chain(cli_inputs.iter().cloned())
        .collect()
}

/// Read a boolean-like env value; anything unrecognised is false.
pub fn parse_bool_like(value: &str) -> bool {
    matches!(
        value.to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// The flag wins; otherwise the env value decides.
pub fn use_stable_rules(flag: bool, env_value: Option<&str>) -> bool {
    flag || env_value.is_some_and(parse_bool_like)
}
