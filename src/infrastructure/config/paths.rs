//! Config path providers
//!
//! Resolution order for [`EnvConfigPath`]:
//! 1. `REPLCONF_CONFIG_FILE` environment variable
//! 2. `<user config dir>/replconf/deploy.toml`
//! 3. `./deploy.toml`

use std::path::{Path, PathBuf};

use crate::domain::ports::ConfigPathProvider;

/// Environment variable overriding the persisted config location
pub const CONFIG_FILE_ENV: &str = "REPLCONF_CONFIG_FILE";

/// File name used under the config directory
pub const DEFAULT_CONFIG_FILE: &str = "deploy.toml";

/// A path fixed at construction time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedConfigPath(PathBuf);

impl FixedConfigPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl ConfigPathProvider for FixedConfigPath {
    fn config_filename(&self) -> PathBuf {
        self.0.clone()
    }
}

/// Resolves the path from the environment on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfigPath;

impl EnvConfigPath {
    pub fn new() -> Self {
        Self
    }

    fn resolve(env_override: Option<String>, config_dir: Option<PathBuf>) -> PathBuf {
        if let Some(path) = env_override.filter(|p| !p.trim().is_empty()) {
            return PathBuf::from(path);
        }
        match config_dir {
            Some(dir) => dir.join("replconf").join(DEFAULT_CONFIG_FILE),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }
}

impl ConfigPathProvider for EnvConfigPath {
    fn config_filename(&self) -> PathBuf {
        Self::resolve(std::env::var(CONFIG_FILE_ENV).ok(), dirs::config_dir())
    }
}
