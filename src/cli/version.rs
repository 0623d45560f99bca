//! Build metadata.
//!
//! Commit and build date are baked in at compile time from
//! `FALCO_VALIDATOR_COMMIT` and `FALCO_VALIDATOR_BUILD_DATE`.

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Commit the binary was built from.
pub const COMMIT: &str = match option_env!("FALCO_VALIDATOR_COMMIT") {
    Some(commit) => commit,
    None => "unknown",
};

/// Date the binary was built.
pub const BUILD_DATE: &str = match option_env!("FALCO_VALIDATOR_BUILD_DATE") {
    Some(date) => date,
    None => "unknown",
};

/// The `--version` output.
pub fn version_banner() -> String {
    format!(
        "Version: {}\nCommit:  {}\nDate:    {}",
        VERSION, COMMIT, BUILD_DATE
    )
}
