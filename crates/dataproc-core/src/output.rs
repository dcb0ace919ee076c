//! Result emission to the console or a text file.
//!
//! The file destination is an explicit part of [`OutputMode`] rather than
//! a hard-coded path, so tests (and callers) can point it anywhere;
//! [`OutputMode::text_file`] gives the conventional default location.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ProcessError;

/// Default destination for file output, relative to the working directory.
pub const DEFAULT_RESULT_PATH: &str = "target/result.txt";

/// Where the formatted result line goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Write the line plus a newline to standard output.
    Console,
    /// Write the line (no trailing newline) as UTF-8 to the given path,
    /// creating parent directories and overwriting any existing file.
    TextFile(PathBuf),
}

impl OutputMode {
    /// File output at the default path, [`DEFAULT_RESULT_PATH`].
    pub fn text_file() -> Self {
        OutputMode::TextFile(PathBuf::from(DEFAULT_RESULT_PATH))
    }
}

impl FromStr for OutputMode {
    type Err = ProcessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "console" => Ok(OutputMode::Console),
            "text-file" => Ok(OutputMode::text_file()),
            other => Err(ProcessError::SelectorError(format!(
                "not an output mode: {}",
                other
            ))),
        }
    }
}

/// Emit one result line to the selected destination.
///
/// # Errors
///
/// Returns [`ProcessError::OutputError`] if directory creation or the
/// file write fails. Errors are not retried.
pub fn emit(mode: &OutputMode, line: &str) -> Result<(), ProcessError> {
    match mode {
        OutputMode::Console => {
            println!("{}", line);
            Ok(())
        }
        OutputMode::TextFile(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)
                        .map_err(|e| ProcessError::OutputError(e.to_string()))?;
                }
            }
            fs::write(path, line).map_err(|e| ProcessError::OutputError(e.to_string()))
        }
    }
}
