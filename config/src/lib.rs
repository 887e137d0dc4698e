//! Load configuration for Quill from XDG `config.toml` and a project `.env`,
//! then apply it to the process environment with priority:
//! **existing env > .env > XDG**.
//!
//! Keys Quill itself reads after this runs: `QUILL_FRAGMENTS_DIR` (fragment
//! override directory) and `QUILL_LOG` (tracing filter). Any other key in the
//! `[env]` table is applied the same way.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[cfg(feature = "tracing-init")]
mod tracing_init;

#[cfg(feature = "tracing-init")]
pub use tracing_init::init_tracing;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    DotenvRead(std::io::Error),
}

/// `[env]` table of `~/.config/<app>/config.toml`; other tables are ignored.
#[derive(serde::Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    env: HashMap<String, String>,
}

fn xdg_env_map(app_name: &str) -> Result<HashMap<String, String>, LoadError> {
    let Some(config_dir) = dirs::config_dir() else {
        return Ok(HashMap::new());
    };
    let path = config_dir.join(app_name).join("config.toml");
    if !path.is_file() {
        return Ok(HashMap::new());
    }
    let content = std::fs::read_to_string(&path).map_err(LoadError::XdgRead)?;
    let file: ConfigFile = toml::from_str(&content)?;
    Ok(file.env)
}

/// Minimal `.env` parser: `KEY=VALUE` lines, `#` comments and blanks skipped,
/// surrounding single or double quotes stripped (double quotes honor `\"`).
fn parse_dotenv(content: &str) -> HashMap<String, String> {
    let mut out = HashMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        let value = value.trim();
        let value = if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
            value[1..value.len() - 1].replace("\\\"", "\"")
        } else if value.len() >= 2 && value.starts_with('\'') && value.ends_with('\'') {
            value[1..value.len() - 1].to_string()
        } else {
            value.to_string()
        };
        out.insert(key.to_string(), value);
    }
    out
}

fn dotenv_map(override_dir: Option<&Path>) -> Result<HashMap<String, String>, LoadError> {
    let dir: Option<PathBuf> = override_dir
        .map(Path::to_path_buf)
        .or_else(|| std::env::current_dir().ok());
    let Some(dir) = dir else {
        return Ok(HashMap::new());
    };
    let path = dir.join(".env");
    if !path.is_file() {
        return Ok(HashMap::new());
    }
    let content = std::fs::read_to_string(&path).map_err(LoadError::DotenvRead)?;
    Ok(parse_dotenv(&content))
}

/// Loads config from XDG `config.toml` and an optional project `.env`, then
/// sets environment variables only for keys that are **not** already set, so
/// existing env always wins.
///
/// Order of precedence when a key is missing from the process environment:
/// 1. Value from project `.env` (current directory, or `override_dir` if given)
/// 2. Value from `~/.config/<app_name>/config.toml` `[env]` table
pub fn load_and_apply(app_name: &str, override_dir: Option<&Path>) -> Result<(), LoadError> {
    let xdg = xdg_env_map(app_name)?;
    let dotenv = dotenv_map(override_dir)?;

    let mut keys: std::collections::HashSet<&String> = xdg.keys().collect();
    keys.extend(dotenv.keys());

    for key in keys {
        if std::env::var(key).is_ok() {
            continue; // existing env wins
        }
        if let Some(v) = dotenv.get(key).or_else(|| xdg.get(key)) {
            std::env::set_var(key, v);
        }
    }
    Ok(())
}
