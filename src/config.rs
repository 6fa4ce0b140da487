use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Environment variable naming the config file; falls back to `config.toml`.
const CONFIG_PATH_VAR: &str = "SCHOOLBOOK_CONFIG";

/// Application configuration, deserialized from a TOML file.
#[derive(Deserialize, Debug)]
pub struct AppConfig {
    /// Path of the backing file the store serializes itself to.
    pub data_path: PathBuf,
    /// Batch names to seed at startup. Batches that already exist in the
    /// store are left alone.
    #[serde(default)]
    pub batches: Vec<String>,
}

/// Loads the application configuration from the given TOML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;
    let app_config: AppConfig = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse TOML from config file {path_ref:?}: {e}"),
    })?;
    Ok(app_config)
}

/// Loads the configuration from the path named by `SCHOOLBOOK_CONFIG`,
/// defaulting to `config.toml` in the working directory.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "config.toml".to_string());
    load_config(path)
}
