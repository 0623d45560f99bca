//! External program execution.
//!
//! Programs are run directly (no shell) and waited on without a timeout.

use crate::error::{Result, ValidatorError};
use std::ffi::OsStr;
use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

/// Result of running an external program.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Interleaved standard output and standard error.
    pub output: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the program succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Describe how the program exited, for error messages.
    pub fn exit_description(&self) -> String {
        match self.exit_code {
            Some(code) => format!("exit status {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

fn display_command<S: AsRef<OsStr>>(program: &str, args: &[S]) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(args.iter().map(|a| a.as_ref().to_string_lossy().into_owned()));
    parts.join(" ")
}

/// Run a program with its output discarded, reporting only the exit status.
pub fn run_status<S: AsRef<OsStr>>(program: &str, args: &[S]) -> Result<CommandResult> {
    let start = Instant::now();
    tracing::debug!("Running {}", display_command(program, args));

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| ValidatorError::CommandFailed {
            program: program.to_string(),
            message: e.to_string(),
        })?;

    Ok(CommandResult {
        exit_code: status.code(),
        output: String::new(),
        duration: start.elapsed(),
        success: status.success(),
    })
}

/// Run a program capturing stdout and stderr through one pipe.
///
/// Both streams share the pipe so the captured text keeps the order the
/// program wrote it in.
pub fn run_combined<S: AsRef<OsStr>>(program: &str, args: &[S]) -> Result<CommandResult> {
    let start = Instant::now();
    tracing::debug!("Running {}", display_command(program, args));

    let spawn_error = |e: std::io::Error| ValidatorError::CommandFailed {
        program: program.to_string(),
        message: e.to_string(),
    };

    let (mut reader, writer) = std::io::pipe().map_err(spawn_error)?;
    let writer_clone = writer.try_clone().map_err(spawn_error)?;

    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(writer)
        .stderr(writer_clone);

    let mut child = cmd.spawn().map_err(spawn_error)?;

    // The pipe only reaches EOF once every write end is closed, including
    // the ones still held by `cmd`.
    drop(cmd);

    let (status, raw) = collect_output(&mut reader, &mut child)?;

    Ok(CommandResult {
        exit_code: status.code(),
        output: String::from_utf8_lossy(&raw).into_owned(),
        duration: start.elapsed(),
        success: status.success(),
    })
}

/// Drain `reader`, then reap `child` even when reading failed.
fn collect_output(reader: &mut impl Read, child: &mut Child) -> Result<(ExitStatus, Vec<u8>)> {
    let mut raw = Vec::new();
    let read = reader.read_to_end(&mut raw);
    let status = child.wait()?;
    read?;
    Ok((status, raw))
}
