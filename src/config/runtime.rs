//! Generated falco config.
//!
//! Falco only needs to know which plugin libraries to load for the rules
//! to validate, so the config is nothing but a `plugins` list.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidatorError};
use crate::rules::PluginDependency;

/// Plugin entry in the falco config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginEntry {
    pub name: String,
    pub library_path: String,
}

/// Falco config for a validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub plugins: Vec<PluginEntry>,
}

/// Library file falco looks up for a plugin, e.g. `libjson.so`.
pub fn library_path_for(name: &str) -> String {
    format!("lib{}.so", name)
}

impl RuntimeConfig {
    /// One plugin entry per dependency, in the given order.
    pub fn from_dependencies(deps: &[PluginDependency]) -> Self {
        Self {
            plugins: deps
                .iter()
                .map(|dep| PluginEntry {
                    name: dep.name.clone(),
                    library_path: library_path_for(&dep.name),
                })
                .collect(),
        }
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> std::result::Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Write the config to `path`, replacing anything already there.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let yaml = self.to_yaml().map_err(|e| ValidatorError::ConfigWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        fs::write(path, yaml).map_err(|e| ValidatorError::ConfigWrite {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
