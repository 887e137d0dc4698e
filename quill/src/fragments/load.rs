//! Load fragment overrides from a directory containing `fragments.yaml`.
//!
//! Defaults live as consts in the parent module; a YAML file may override
//! individual texts. Missing file keeps the defaults; a present but invalid
//! file is a [`LoadError`]. The directory comes from the caller, the
//! `QUILL_FRAGMENTS_DIR` env var, or `./fragments`, in that order.

use std::path::Path;

use serde::Deserialize;

use super::FragmentCatalog;

/// File name looked up inside the fragments directory.
const FRAGMENTS_FILE: &str = "fragments.yaml";

/// Default directory name when `QUILL_FRAGMENTS_DIR` is not set.
const DEFAULT_FRAGMENTS_DIR: &str = "fragments";

/// Error when loading fragment overrides (missing dir, unreadable or invalid YAML).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("fragments directory not found or not readable: {0}")]
    DirNotFound(String),
    #[error("failed to read fragments file {path}: {message}")]
    ReadFile { path: String, message: String },
    #[error("failed to parse YAML in {path}: {message}")]
    ParseYaml { path: String, message: String },
}

/// Per-key overrides; any key may be absent, in which case the default text stays.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FragmentsFile {
    eagerness_low: Option<String>,
    eagerness_medium: Option<String>,
    eagerness_high: Option<String>,
    tool_preamble: Option<String>,
    progress_narration: Option<String>,
    persistence: Option<String>,
    tool_rules_header: Option<String>,
    planning_default: Option<String>,
    coding_enabled: Option<String>,
    apply_patch: Option<String>,
    tool_defs: Option<String>,
    markdown_format: Option<String>,
    markdown_naming: Option<String>,
    json_schema_instruction: Option<String>,
    json_generic_instruction: Option<String>,
    examples_header: Option<String>,
    appendix_swe_bench: Option<String>,
    appendix_retail: Option<String>,
    brief_rationale: Option<String>,
    meta_instruction: Option<String>,
    meta_not_provided: Option<String>,
}

impl FragmentsFile {
    fn apply(self, mut catalog: FragmentCatalog) -> FragmentCatalog {
        macro_rules! take {
            ($($field:ident),+ $(,)?) => {
                $(if let Some(v) = self.$field { catalog.$field = v; })+
            };
        }
        take!(
            eagerness_low,
            eagerness_medium,
            eagerness_high,
            tool_preamble,
            progress_narration,
            persistence,
            tool_rules_header,
            planning_default,
            coding_enabled,
            apply_patch,
            tool_defs,
            markdown_format,
            markdown_naming,
            json_schema_instruction,
            json_generic_instruction,
            examples_header,
            appendix_swe_bench,
            appendix_retail,
            brief_rationale,
            meta_instruction,
            meta_not_provided,
        );
        catalog
    }
}

/// Returns the directory to load from: `dir` if `Some`, else `QUILL_FRAGMENTS_DIR`,
/// else `./fragments`.
fn fragments_dir(dir: Option<&Path>) -> std::path::PathBuf {
    dir.map(std::path::PathBuf::from).unwrap_or_else(|| {
        std::env::var("QUILL_FRAGMENTS_DIR")
            .ok()
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|| std::path::PathBuf::from(DEFAULT_FRAGMENTS_DIR))
    })
}

/// Loads the catalog from a directory: reads `fragments.yaml` when present and
/// applies its overrides on top of the defaults.
///
/// Missing file keeps the defaults. Only errors when the directory itself is
/// missing or a present file fails to read or parse.
pub fn load(dir: Option<&Path>) -> Result<FragmentCatalog, LoadError> {
    let base = fragments_dir(dir);
    if !base.exists() || !base.is_dir() {
        return Err(LoadError::DirNotFound(base.display().to_string()));
    }

    let path = base.join(FRAGMENTS_FILE);
    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(FragmentCatalog::default())
        }
        Err(e) => {
            return Err(LoadError::ReadFile {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        }
    };
    let file: FragmentsFile = serde_yaml::from_str(&content).map_err(|e| LoadError::ParseYaml {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), "applying fragment overrides");
    Ok(file.apply(FragmentCatalog::default()))
}

/// Loads from `dir` if it exists; otherwise returns the default catalog.
pub fn load_or_default(dir: Option<&Path>) -> FragmentCatalog {
    load(dir).unwrap_or_default()
}
