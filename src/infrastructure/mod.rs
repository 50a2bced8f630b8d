//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `config/` - Config path providers
//! - `repositories/` - Repository implementations (TOML config file)

pub mod config;
pub mod repositories;

// Re-export for convenience
pub use config::{EnvConfigPath, FixedConfigPath};
pub use repositories::TomlConfigRepository;
