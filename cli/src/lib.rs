//! Library surface of the Quill CLI: record loading, catalog resolution, and
//! rendering, kept out of `main.rs` so `cli/tests/` can drive it directly.
//!
//! The flow mirrors the application contract: collect a complete Options
//! Record (settings file, preset, or defaults), snapshot it, build once.
//! Errors here are boundary errors only; assembly itself cannot fail.

use std::path::{Path, PathBuf};

use quill::fragments;
use quill::preset::Preset;
use quill::{build_prompt, settings, FragmentCatalog, PromptOptions};

/// Boundary error for CLI operations; printed to stderr, never a panic.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Settings(#[from] quill::SettingsError),
    #[error(transparent)]
    Export(#[from] quill::ExportError),
    #[error(transparent)]
    Fragments(#[from] fragments::LoadError),
    #[error("unknown preset: {0} (see `quill preset list`)")]
    UnknownPreset(String),
}

/// Where the Options Record comes from for one build.
#[derive(Debug, Clone, Default)]
pub struct RecordSource {
    /// Settings document to load; wins over `preset` when both are set.
    pub settings: Option<PathBuf>,
    /// Preset name or id.
    pub preset: Option<String>,
}

/// Resolves a full record from the source: settings file, else preset,
/// else the default record.
pub fn load_record(source: &RecordSource) -> Result<PromptOptions, CliError> {
    if let Some(path) = &source.settings {
        return Ok(settings::load(path)?);
    }
    if let Some(name) = &source.preset {
        let preset =
            Preset::from_name(name).ok_or_else(|| CliError::UnknownPreset(name.clone()))?;
        return Ok(preset.options());
    }
    Ok(PromptOptions::default())
}

/// Resolves the fragment catalog. An explicitly given directory must exist;
/// otherwise the env/default directory is consulted and missing means the
/// built-in defaults.
pub fn load_catalog(fragments_dir: Option<&Path>) -> Result<FragmentCatalog, CliError> {
    match fragments_dir {
        Some(dir) => Ok(fragments::load(Some(dir))?),
        None => Ok(fragments::load_or_default(None)),
    }
}

/// Loads the record and catalog, then assembles the prompt.
pub fn render(source: &RecordSource, fragments_dir: Option<&Path>) -> Result<String, CliError> {
    let opts = load_record(source)?;
    let catalog = load_catalog(fragments_dir)?;
    tracing::debug!(
        meta_mode = opts.meta_mode,
        examples = opts.examples.len(),
        "assembling prompt"
    );
    Ok(build_prompt(&opts, &catalog))
}

/// Writes a settings document to start editing from: the default record, or
/// a preset's record when `preset` is given.
pub fn write_settings_template(path: &Path, preset: Option<&str>) -> Result<(), CliError> {
    let source = RecordSource {
        settings: None,
        preset: preset.map(str::to_string),
    };
    let opts = load_record(&source)?;
    settings::save(path, &opts)?;
    Ok(())
}
