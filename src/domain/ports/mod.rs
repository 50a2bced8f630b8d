//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod config_path;
pub mod config_repository;
pub mod deployment_backend;

pub use config_path::ConfigPathProvider;
pub use config_repository::{ConfigFileRepository, ConfigStoreError, ConfigStoreResult};
pub use deployment_backend::DeploymentBackend;
