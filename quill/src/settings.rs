//! Settings document: the whole Options Record round-tripped as one flat
//! JSON object.
//!
//! Loading deserializes into a record constructed with defaults first, so
//! absent keys fall back to their default values and unknown keys are
//! ignored. Any failure leaves the caller's in-memory record untouched:
//! [`load`] only ever returns a complete record or an error.

use std::path::Path;

use crate::options::PromptOptions;

/// Boundary error for settings save/load. All variants are recoverable.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {message}")]
    Read { path: String, message: String },
    #[error("failed to write settings file {path}: {message}")]
    Write { path: String, message: String },
    #[error("malformed settings document {path}: {message}")]
    Parse { path: String, message: String },
}

/// Serializes the full record as pretty-printed JSON (write-all-fields).
pub fn to_json(opts: &PromptOptions) -> String {
    // A flat struct of strings, bools, and small collections cannot fail to serialize.
    serde_json::to_string_pretty(opts).unwrap_or_else(|_| "{}".to_string())
}

/// Parses a settings document. Absent fields default; unknown keys are ignored.
pub fn from_json(path_label: &str, content: &str) -> Result<PromptOptions, SettingsError> {
    serde_json::from_str(content).map_err(|e| SettingsError::Parse {
        path: path_label.to_string(),
        message: e.to_string(),
    })
}

/// Writes the full record to `path` as one JSON document.
pub fn save(path: &Path, opts: &PromptOptions) -> Result<(), SettingsError> {
    let json = to_json(opts);
    std::fs::write(path, format!("{}\n", json)).map_err(|e| SettingsError::Write {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Reads and parses a settings document into a fresh record.
pub fn load(path: &Path) -> Result<PromptOptions, SettingsError> {
    let content = std::fs::read_to_string(path).map_err(|e| SettingsError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), "loading settings document");
    from_json(&path.display().to_string(), &content)
}
