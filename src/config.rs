//! Runtime configuration for the record store location.

use std::path::PathBuf;

/// Environment variable naming the data directory root.
const DATA_DIR_VAR: &str = "CARTWRIGHT_DATA_DIR";

/// Default data directory when nothing is configured.
const DEFAULT_DATA_DIR: &str = "data";

/// Runtime configuration for the service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Root directory holding the `products/` and `carts/` stores.
    pub data_dir: PathBuf,
}

impl ServiceConfig {
    /// Creates a configuration rooted at the given directory.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    /// Resolves the data directory from the environment.
    ///
    /// Loads `.env` first, then reads `CARTWRIGHT_DATA_DIR`, falling back to
    /// `./data` when unset.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let dir = std::env::var(DATA_DIR_VAR).unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
        Self::new(dir)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}
