//! Concatenation of rules files into one document.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, ValidatorError};
use crate::ui::UserInterface;

/// Append every rules file, byte for byte and in order, to `output`.
///
/// `output` is truncated first. Nothing is inserted between files.
/// Returns the number of bytes written.
pub fn combine_rules_files(
    inputs: &[PathBuf],
    output: &Path,
    ui: &mut dyn UserInterface,
) -> Result<u64> {
    let file = File::create(output).map_err(|e| ValidatorError::Combine {
        path: output.to_path_buf(),
        message: format!("failed to create output file: {}", e),
    })?;
    let mut writer = BufWriter::new(file);

    let mut total = 0;
    for input in inputs {
        ui.message(&format!("appending {}", input.display()));
        total += append_file(&mut writer, input).map_err(|e| ValidatorError::Combine {
            path: output.to_path_buf(),
            message: format!("failed to append file {}: {}", input.display(), e),
        })?;
    }

    writer.flush().map_err(|e| ValidatorError::Combine {
        path: output.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(total)
}

fn append_file(writer: &mut impl Write, input: &Path) -> io::Result<u64> {
    let mut file = File::open(input)?;
    io::copy(&mut file, writer)
}
