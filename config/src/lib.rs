//! Load catalog overrides from TOML, with priority: **env-var path > XDG config**.
//!
//! The override file lets a deployment disable models, replace parameter
//! defaults, and restrict regions without touching the built-in catalog:
//!
//! ```toml
//! disabled = ["amazon.titan-text-lite-v1"]
//! regions = ["us-east-1", "us-west-2"]
//!
//! [parameters."anthropic.claude-3-haiku-20240307-v1:0"]
//! temperature = 0.5
//! max_tokens = 2048
//! ```

mod xdg;

use std::path::Path;

use model_desc_core::CatalogOverrides;
use thiserror::Error;

/// Environment variable naming an explicit override file path. Takes priority
/// over the XDG location; a missing file at this path is an error.
pub const OVERRIDES_PATH_ENV: &str = "ROSTER_CATALOG_OVERRIDES";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("override file path: {0}")]
    Path(String),
    #[error("read override file: {0}")]
    Read(std::io::Error),
    #[error("parse override toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Read and parse an override file from an explicit path.
pub fn load_from(path: impl AsRef<Path>) -> Result<CatalogOverrides, LoadError> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(LoadError::Read)?;
    let overrides: CatalogOverrides = toml::from_str(&contents)?;
    Ok(overrides)
}

/// Load overrides for the running process.
///
/// Order: [`OVERRIDES_PATH_ENV`] if set (the file must exist), else
/// `$XDG_CONFIG_HOME/roster/catalog.toml` (a missing file yields empty
/// overrides, matching a deployment with nothing to override).
pub fn load_default() -> Result<CatalogOverrides, LoadError> {
    if let Ok(path) = std::env::var(OVERRIDES_PATH_ENV) {
        return load_from(&path);
    }
    match xdg::default_config_path()? {
        Some(path) => load_from(path),
        None => Ok(CatalogOverrides::default()),
    }
}

/// Serializes tests that mutate process environment variables.
#[cfg(test)]
pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|e| e.into_inner())
}
