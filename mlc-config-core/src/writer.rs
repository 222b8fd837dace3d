use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while writing a JSON document.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to serialize the value.
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Failed to write output file.
    #[error("failed to write JSON file: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize `value` as JSON indented with two spaces.
pub fn write<T: Serialize + ?Sized>(value: &T) -> Result<String, WriteError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Serialize `value` and write it to `path`.
pub fn write_file<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), WriteError> {
    let text = write(value)?;
    fs::write(path, text)?;
    Ok(())
}
