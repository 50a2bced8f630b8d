//! Error types for replconf
//!
//! Uses `thiserror` for library errors. Every error aborts the running step
//! and is surfaced to the orchestrator unchanged; nothing is retried here.

use thiserror::Error;

use crate::domain::ports::ConfigStoreError;

/// Result type alias for deployment step operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Errors raised while reading or writing a [`PropertyStore`](crate::PropertyStore)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropertyError {
    /// No value at the requested path
    #[error("property '{path}' not found")]
    KeyNotFound { path: String },

    /// Value exists but is not a string
    #[error("property '{path}' is a {found}, expected a string")]
    NotAString { path: String, found: &'static str },

    /// Malformed key path
    #[error("invalid property path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// Persisted representation could not be parsed or rendered
    #[error("invalid property file format: {message}")]
    InvalidFormat { message: String },
}

/// Main error type for deployment steps
#[derive(Error, Debug)]
pub enum DeployError {
    /// Top-level `deployment_service` is absent or empty
    #[error("no active replication service: 'deployment_service' is not set")]
    MissingServiceKey,

    /// `repl_services.<service>.deployment_service` is absent
    #[error("replication service '{service}' has no 'deployment_service' type")]
    MissingServiceType { service: String },

    /// The deployment backend reported a failure
    #[error("deployment of '{service}' ({service_type}) failed: {reason:#}")]
    Backend {
        service: String,
        service_type: String,
        reason: anyhow::Error,
    },

    /// Loading or storing the persisted configuration failed
    #[error("persisted configuration error: {0}")]
    Persistence(#[from] ConfigStoreError),

    /// A selector value had the wrong shape
    #[error(transparent)]
    Property(#[from] PropertyError),

    /// The orchestrator asked for a step this module does not provide
    #[error("unknown deployment method '{name}'")]
    UnknownDeploymentMethod { name: String },
}
