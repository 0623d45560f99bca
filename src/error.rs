//! Error types for validation runs.
//!
//! This module defines [`ValidatorError`], the error type used throughout
//! the pipeline, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every stage failure is fatal; there is no partial-success mode
//! - Each variant carries the path, artifact or program it concerns

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for validation runs.
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// A rules file could not be read.
    #[error("Failed to read rules file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A rules file is not a sequence of rule-group records.
    #[error("Failed to parse rules file {path}: {source}")]
    Format {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The artifact installer failed for an artifact reference.
    #[error("Failed to install artifact {artifact}: {message}")]
    ArtifactInstall { artifact: String, message: String },

    /// The rules directory could not be listed.
    #[error("Failed to read dir {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The generated falco config could not be serialized or written.
    #[error("Failed to generate config at {path}: {message}")]
    ConfigWrite { path: PathBuf, message: String },

    /// A rules file could not be appended to the combined document.
    #[error("Failed to combine rules files at {path}: {message}")]
    Combine { path: PathBuf, message: String },

    /// The validator rejected the rules.
    #[error("Validation failed: {message}")]
    ValidationFailure { message: String, output: String },

    /// An external program could not be started.
    #[error("Failed to run {program}: {message}")]
    CommandFailed { program: String, message: String },

    /// The command line was not usable.
    #[error("{message}")]
    Usage { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for validation runs.
pub type Result<T> = std::result::Result<T, ValidatorError>;
