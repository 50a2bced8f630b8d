//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod toml_config;

pub use toml_config::TomlConfigRepository;
