//! Removal of generated files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Files generated during a run, removed when this value is dropped.
///
/// Dropping happens on every exit path of the run, so a failed stage
/// never leaves a half-written config or rules document behind.
#[derive(Debug, Default)]
pub struct TempArtifacts {
    paths: Vec<PathBuf>,
}

impl TempArtifacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `path` when this value is dropped.
    ///
    /// Track a path before writing to it.
    pub fn track(&mut self, path: &Path) {
        self.paths.push(path.to_path_buf());
    }
}

impl Drop for TempArtifacts {
    fn drop(&mut self) {
        for path in &self.paths {
            match fs::remove_file(path) {
                Ok(()) => tracing::debug!("Removed {}", path.display()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => tracing::debug!("Could not remove {}: {}", path.display(), e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn drop_removes_tracked_files() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("config.yaml");
        let rules = temp.path().join("rules.yaml");
        fs::write(&config, "plugins: []\n").unwrap();
        fs::write(&rules, "- list: x\n").unwrap();

        {
            let mut artifacts = TempArtifacts::new();
            artifacts.track(&config);
            artifacts.track(&rules);
        }

        assert!(!config.exists());
        assert!(!rules.exists());
    }

    #[test]
    fn drop_ignores_files_never_written() {
        let temp = TempDir::new().unwrap();
        let mut artifacts = TempArtifacts::new();
        artifacts.track(&temp.path().join("never-written.yaml"));
        drop(artifacts);
    }

    #[test]
    fn untracked_files_are_left_alone() {
        let temp = TempDir::new().unwrap();
        let keep = temp.path().join("keep.yaml");
        fs::write(&keep, "").unwrap();

        drop(TempArtifacts::new());
        assert!(keep.exists());
    }
}
