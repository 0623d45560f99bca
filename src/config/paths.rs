//! Well-known filesystem locations.

use std::path::{Path, PathBuf};

/// Directory falcoctl installs rules files into, scanned on every run.
pub const DEFAULT_RULES_DIR: &str = "/etc/falco/rules.d";

/// Falco's stable ruleset, injected with `--stable`.
pub const DEFAULT_STABLE_RULES: &str = "/etc/falco/falco_rules.yaml";

/// Where the generated falco config is written.
pub const DEFAULT_CONFIG_OUTPUT: &str = "/tmp/falco-validator-config.yaml";

/// Where the combined rules document is written.
pub const DEFAULT_RULES_OUTPUT: &str = "/tmp/falco-validator-rules.yaml";

/// Filesystem locations for one validation run.
///
/// Defaults match a stock falco install. Tests and CI point these
/// somewhere else instead of touching `/etc` and `/tmp`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorPaths {
    /// Directory of installed rules files.
    pub rules_dir: PathBuf,
    /// Stable ruleset file.
    pub stable_rules: PathBuf,
    /// Generated falco config (removed after the run).
    pub config_output: PathBuf,
    /// Combined rules document (removed after the run).
    pub rules_output: PathBuf,
}

impl Default for ValidatorPaths {
    fn default() -> Self {
        Self {
            rules_dir: PathBuf::from(DEFAULT_RULES_DIR),
            stable_rules: PathBuf::from(DEFAULT_STABLE_RULES),
            config_output: PathBuf::from(DEFAULT_CONFIG_OUTPUT),
            rules_output: PathBuf::from(DEFAULT_RULES_OUTPUT),
        }
    }
}

impl ValidatorPaths {
    /// Place every location under `root`, keeping the stock layout.
    ///
    /// `root/rules.d`, `root/falco_rules.yaml`, `root/config.yaml`
    /// and `root/rules.yaml`.
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            rules_dir: root.join("rules.d"),
            stable_rules: root.join("falco_rules.yaml"),
            config_output: root.join("config.yaml"),
            rules_output: root.join("rules.yaml"),
        }
    }
}

/// Options for one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorOptions {
    /// Inject the stable ruleset.
    pub use_stable_rules: bool,
    /// Filesystem locations.
    pub paths: ValidatorPaths,
}

impl ValidatorOptions {
    pub fn new(use_stable_rules: bool, paths: ValidatorPaths) -> Self {
        Self {
            use_stable_rules,
            paths,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_install() {
        let paths = ValidatorPaths::default();
        assert_eq!(paths.rules_dir, PathBuf::from("/etc/falco/rules.d"));
        assert_eq!(
            paths.stable_rules,
            PathBuf::from("/etc/falco/falco_rules.yaml")
        );
        assert_eq!(
            paths.config_output,
            PathBuf::from("/tmp/falco-validator-config.yaml")
        );
        assert_eq!(
            paths.rules_output,
            PathBuf::from("/tmp/falco-validator-rules.yaml")
        );
    }

    #[test]
    fn rooted_at_keeps_everything_under_root() {
        let root = Path::new("/sandbox");
        let paths = ValidatorPaths::rooted_at(root);
        for p in [
            &paths.rules_dir,
            &paths.stable_rules,
            &paths.config_output,
            &paths.rules_output,
        ] {
            assert!(p.starts_with(root));
        }
    }

    #[test]
    fn default_options_do_not_use_stable_rules() {
        let options = ValidatorOptions::default();
        assert!(!options.use_stable_rules);
        assert_eq!(options.paths, ValidatorPaths::default());
    }
}
