//! Configuration infrastructure

mod paths;

pub use paths::{EnvConfigPath, FixedConfigPath, CONFIG_FILE_ENV, DEFAULT_CONFIG_FILE};
