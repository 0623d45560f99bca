//! Plugin dependency extraction from rules files.
//!
//! A rules file is a YAML sequence of rule-group records. Any record may
//! carry a `required_plugin_versions` list; everything else in the record
//! (rules, macros, lists) is ignored here.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidatorError};

/// A plugin required by a rules file.
///
/// Identity is the name alone; the version is carried through untouched.
/// Scalars keep their source text, so `version: 1.10` stays `"1.10"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDependency {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
}

impl PluginDependency {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

/// One top-level record of a rules file.
#[derive(Debug, Default, Deserialize)]
struct RuleGroup {
    #[serde(default)]
    required_plugin_versions: Vec<PluginDependency>,
}

/// Parse one rules file and return its declared plugins in document order.
pub fn parse_rules_file(path: &Path) -> Result<Vec<PluginDependency>> {
    let data = fs::read(path).map_err(|source| ValidatorError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_rules_document(&data).map_err(|source| ValidatorError::Format {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse rules file content.
///
/// An empty document declares nothing. Content that is not UTF-8 is a
/// parse error like any other malformed YAML.
pub fn parse_rules_document(
    content: &[u8],
) -> std::result::Result<Vec<PluginDependency>, serde_yaml::Error> {
    let groups: Option<Vec<RuleGroup>> = serde_yaml::from_slice(content)?;

    Ok(groups
        .unwrap_or_default()
        .into_iter()
        .flat_map(|group| group.required_plugin_versions)
        .collect())
}

/// Drop every dependency whose name was already seen.
///
/// First occurrence wins, even when a later one declares another version.
pub fn deduplicate_plugins(deps: Vec<PluginDependency>) -> Vec<PluginDependency> {
    let mut seen = HashSet::new();
    deps.into_iter()
        .filter(|dep| seen.insert(dep.name.clone()))
        .collect()
}

/// Extract the deduplicated plugin list across all rules files, in order.
pub fn extract_plugin_dependencies(paths: &[PathBuf]) -> Result<Vec<PluginDependency>> {
    let mut all = Vec::new();
    for path in paths {
        let deps = parse_rules_file(path)?;
        tracing::debug!("{} declares {} plugin(s)", path.display(), deps.len());
        all.extend(deps);
    }

    Ok(deduplicate_plugins(all))
}
