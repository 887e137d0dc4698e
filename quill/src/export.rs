//! Plain-text export: the assembled prompt written verbatim to a file,
//! no header or footer added.

use std::path::Path;

/// Boundary error for export; recoverable, the in-memory prompt is untouched.
#[derive(Debug, thiserror::Error)]
#[error("failed to write prompt to {path}: {message}")]
pub struct ExportError {
    pub path: String,
    pub message: String,
}

/// Writes `prompt` to `path` exactly as assembled.
pub fn write_prompt(path: &Path, prompt: &str) -> Result<(), ExportError> {
    std::fs::write(path, prompt).map_err(|e| ExportError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
