use std::{
    env,
    path::{Path, PathBuf},
};

pub const CONFIG_FILE: &str = ".redux-chain.toml";

/// Load config file content from the first location that has one
///
/// Searches in order:
/// 1. `.redux-chain.toml` in the current working directory
/// 2. `.redux-chain.toml` in the home directory
/// 3. `config.toml` in the application config directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    candidates.extend(get_home_config_path());
    candidates.extend(crate::app_config_path().ok());

    read_first(&candidates)
}

/// Read the first candidate path that exists and is readable
pub fn read_first<P: AsRef<Path>>(candidates: &[P]) -> Option<String> {
    candidates.iter().find_map(|path| {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => {
                log::debug!("Loaded config from {}", path.display());
                Some(content)
            }
            Err(_) => None,
        }
    })
}

/// Get the path to the config file in the home directory
///
/// Returns ~/.redux-chain.toml if HOME environment variable is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
