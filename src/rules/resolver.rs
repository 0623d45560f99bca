//! Input resolution.
//!
//! Turns the mixed list of command-line inputs into the ordered list of
//! rules files to validate. Inputs that look like paths are used as-is;
//! anything else is an artifact reference handed to the installer, whose
//! rules files are then picked up from the rules directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ValidatorOptions;
use crate::error::{Result, ValidatorError};
use crate::tools::ArtifactInstaller;

/// Extensions that mark an input as a rules file path.
pub const RULES_FILE_EXTENSIONS: &[&str] = &[".yaml", ".yml"];

/// Extension of rules files discovered in the rules directory.
pub const INSTALLED_RULES_EXTENSION: &str = ".yaml";

/// How an input is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A rules file on disk.
    Path,
    /// An artifact reference to install.
    Artifact,
}

/// Classify an input by its shape alone; nothing is checked on disk.
pub fn classify_input(input: &str) -> InputKind {
    if input.contains('/') || RULES_FILE_EXTENSIONS.iter().any(|ext| input.ends_with(ext)) {
        InputKind::Path
    } else {
        InputKind::Artifact
    }
}

/// Resolve inputs into a sorted list of rules files.
///
/// Duplicates are kept: a file given on the command line that also lives
/// in the rules directory appears twice.
pub fn resolve_inputs(
    inputs: &[String],
    options: &ValidatorOptions,
    installer: &dyn ArtifactInstaller,
) -> Result<Vec<PathBuf>> {
    let paths = &options.paths;
    let mut rule_paths = Vec::new();

    if options.use_stable_rules {
        rule_paths.push(paths.stable_rules.clone());
    }

    for input in inputs {
        match classify_input(input) {
            InputKind::Path => {
                tracing::debug!("Using rules file {}", input);
                rule_paths.push(PathBuf::from(input));
            }
            InputKind::Artifact => {
                tracing::debug!("Installing artifact {}", input);
                installer.install(input, &paths.rules_dir)?;
            }
        }
    }

    rule_paths.extend(installed_rules_files(&paths.rules_dir)?);

    sort_by_path_string(&mut rule_paths);
    Ok(rule_paths)
}

/// List the rules files in the rules directory.
pub fn installed_rules_files(rules_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(rules_dir).map_err(|source| ValidatorError::DirectoryRead {
        path: rules_dir.to_path_buf(),
        source,
    })?;

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ValidatorError::DirectoryRead {
            path: rules_dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name();
        if name.to_string_lossy().ends_with(INSTALLED_RULES_EXTENSION) {
            found.push(rules_dir.join(name));
        }
    }

    Ok(found)
}

/// Sort on the raw path string rather than component-wise.
fn sort_by_path_string(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidatorPaths;
    use std::cell::RefCell;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingInstaller {
        installed: RefCell<Vec<(String, PathBuf)>>,
        fail_on: Option<String>,
        writes: Vec<(String, String)>,
    }

    impl ArtifactInstaller for RecordingInstaller {
        fn install(&self, artifact: &str, target_dir: &Path) -> Result<()> {
            self.installed
                .borrow_mut()
                .push((artifact.to_string(), target_dir.to_path_buf()));
            if self.fail_on.as_deref() == Some(artifact) {
                return Err(ValidatorError::ArtifactInstall {
                    artifact: artifact.to_string(),
                    message: "exit status 1".to_string(),
                });
            }
            for (name, content) in &self.writes {
                if name.starts_with(artifact) {
                    fs::write(target_dir.join(name), content)?;
                }
            }
            Ok(())
        }
    }

    fn setup() -> (TempDir, ValidatorOptions) {
        let temp = TempDir::new().unwrap();
        let paths = ValidatorPaths::rooted_at(temp.path());
        fs::create_dir_all(&paths.rules_dir).unwrap();
        (temp, ValidatorOptions::new(false, paths))
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn classify_by_separator_or_extension() {
        assert_eq!(classify_input("./rules"), InputKind::Path);
        assert_eq!(classify_input("custom.yaml"), InputKind::Path);
        assert_eq!(classify_input("custom.yml"), InputKind::Path);
        assert_eq!(classify_input("ghcr.io/falcosecurity/rules/falco-rules:3"), InputKind::Path);
        assert_eq!(classify_input("k8saudit-rules"), InputKind::Artifact);
        assert_eq!(classify_input("falco-rules:3.0.0"), InputKind::Artifact);
        assert_eq!(classify_input("rules.json"), InputKind::Artifact);
    }

    #[test]
    fn path_inputs_are_kept_verbatim_without_install() {
        let (_temp, options) = setup();
        let installer = RecordingInstaller::default();

        let resolved = resolve_inputs(
            &strings(&["b/custom.yaml", "a.yml"]),
            &options,
            &installer,
        )
        .unwrap();

        assert_eq!(
            resolved,
            vec![PathBuf::from("a.yml"), PathBuf::from("b/custom.yaml")]
        );
        assert!(installer.installed.borrow().is_empty());
    }

    #[test]
    fn each_artifact_is_installed_once_into_rules_dir() {
        let (_temp, options) = setup();
        let installer = RecordingInstaller::default();

        resolve_inputs(
            &strings(&["k8saudit-rules", "local.yaml", "cloudtrail-rules"]),
            &options,
            &installer,
        )
        .unwrap();

        let installed = installer.installed.borrow();
        assert_eq!(
            *installed,
            vec![
                ("k8saudit-rules".to_string(), options.paths.rules_dir.clone()),
                ("cloudtrail-rules".to_string(), options.paths.rules_dir.clone()),
            ]
        );
    }

    #[test]
    fn installed_files_are_discovered() {
        let (_temp, options) = setup();
        let installer = RecordingInstaller {
            writes: vec![(
                "k8saudit-rules.yaml".to_string(),
                "- list: x\n  items: []\n".to_string(),
            )],
            ..Default::default()
        };

        let resolved = resolve_inputs(&strings(&["k8saudit-rules"]), &options, &installer).unwrap();
        assert_eq!(
            resolved,
            vec![options.paths.rules_dir.join("k8saudit-rules.yaml")]
        );
    }

    #[test]
    fn discovery_only_picks_yaml_extension() {
        let (_temp, options) = setup();
        let dir = &options.paths.rules_dir;
        fs::write(dir.join("one.yaml"), "").unwrap();
        fs::write(dir.join("two.yml"), "").unwrap();
        fs::write(dir.join("README.md"), "").unwrap();

        let resolved = resolve_inputs(&[], &options, &RecordingInstaller::default()).unwrap();
        assert_eq!(resolved, vec![dir.join("one.yaml")]);
    }

    #[test]
    fn stable_rules_included_even_without_inputs() {
        let (_temp, mut options) = setup();
        options.use_stable_rules = true;

        let resolved = resolve_inputs(&[], &options, &RecordingInstaller::default()).unwrap();
        assert_eq!(resolved, vec![options.paths.stable_rules.clone()]);
    }

    #[test]
    fn result_is_sorted_for_any_input_order() {
        let (_temp, mut options) = setup();
        options.use_stable_rules = true;
        fs::write(options.paths.rules_dir.join("zz.yaml"), "").unwrap();
        fs::write(options.paths.rules_dir.join("aa.yaml"), "").unwrap();

        let forward = resolve_inputs(
            &strings(&["/z/last.yaml", "/a/first.yaml", "m.yaml"]),
            &options,
            &RecordingInstaller::default(),
        )
        .unwrap();
        let backward = resolve_inputs(
            &strings(&["m.yaml", "/a/first.yaml", "/z/last.yaml"]),
            &options,
            &RecordingInstaller::default(),
        )
        .unwrap();

        assert_eq!(forward, backward);
        let as_strings: Vec<String> = forward
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        let mut sorted = as_strings.clone();
        sorted.sort();
        assert_eq!(as_strings, sorted);
        assert_eq!(forward.len(), 6);
    }

    #[test]
    fn sorting_compares_whole_strings() {
        let mut paths = vec![PathBuf::from("a/x.yaml"), PathBuf::from("a-b/x.yaml")];
        sort_by_path_string(&mut paths);
        assert_eq!(
            paths,
            vec![PathBuf::from("a-b/x.yaml"), PathBuf::from("a/x.yaml")]
        );
    }

    #[test]
    fn duplicates_are_not_removed() {
        let (_temp, options) = setup();
        let installed = options.paths.rules_dir.join("custom.yaml");
        fs::write(&installed, "").unwrap();

        let input = installed.to_string_lossy().into_owned();
        let resolved = resolve_inputs(&[input], &options, &RecordingInstaller::default()).unwrap();
        assert_eq!(resolved, vec![installed.clone(), installed]);
    }

    #[test]
    fn install_failure_aborts_resolution() {
        let (_temp, options) = setup();
        let installer = RecordingInstaller {
            fail_on: Some("broken-rules".to_string()),
            ..Default::default()
        };

        let err = resolve_inputs(
            &strings(&["broken-rules", "never-installed"]),
            &options,
            &installer,
        )
        .unwrap_err();

        assert!(matches!(err, ValidatorError::ArtifactInstall { .. }));
        assert_eq!(installer.installed.borrow().len(), 1);
    }

    #[test]
    fn missing_rules_dir_is_directory_read_error() {
        let temp = TempDir::new().unwrap();
        let options = ValidatorOptions::new(false, ValidatorPaths::rooted_at(temp.path()));

        let err = resolve_inputs(
            &strings(&["local.yaml"]),
            &options,
            &RecordingInstaller::default(),
        )
        .unwrap_err();

        assert!(matches!(err, ValidatorError::DirectoryRead { .. }));
        assert!(err.to_string().contains("rules.d"));
    }
}
