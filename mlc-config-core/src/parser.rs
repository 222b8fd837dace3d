use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors that can occur while loading a JSON document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input path does not carry a `.json` extension.
    #[error("{0} is not a JSON file")]
    NotJson(String),
    /// Input could not be decoded into the requested shape.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Failed to read input file.
    #[error("failed to read JSON file: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse JSON bytes into `T`.
pub fn parse<T: DeserializeOwned>(json: &[u8]) -> Result<T, ParseError> {
    Ok(serde_json::from_slice(json)?)
}

/// Parse a `.json` file into `T`.
///
/// The extension is checked before the file is touched, so a wrong path
/// fails the same way whether or not it exists.
pub fn parse_file<T: DeserializeOwned>(path: &Path) -> Result<T, ParseError> {
    ensure_json_extension(path)?;
    let bytes = fs::read(path)?;
    parse(&bytes)
}

/// Reject paths whose extension is not exactly `json`.
pub fn ensure_json_extension(path: &Path) -> Result<(), ParseError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(()),
        _ => Err(ParseError::NotJson(path.display().to_string())),
    }
}
