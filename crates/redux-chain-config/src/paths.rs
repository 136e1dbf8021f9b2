//! Configuration and cache directory paths
//!
//! Uses XDG directories via `dirs` crate. Only the cache directory is
//! created on demand.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/redux-chain/`, `~/.cache/redux-chain/`
//! - macOS: `~/Library/Application Support/redux-chain/`, `~/Library/Caches/redux-chain/`
//! - Windows: `%APPDATA%\redux-chain\`, `%LOCALAPPDATA%\redux-chain\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "redux-chain";

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}

/// Get path to app config file
///
/// Only resolves the path; the config directory is left as it is.
pub fn app_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME).join("config.toml"))
}
