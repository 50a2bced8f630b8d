//! replconf - configuration step for replicated data-service deployments
//!
//! Resolves the per-service configuration overlay for the active replication
//! service, hands the merged view to an external deployment backend, then
//! restores the service's record in the persisted configuration file so the
//! transient overlay is never written back.
//!
//! Orchestrators discover the step with [`deployment_methods`] and run it
//! with [`run_deployment_method`], passing a [`StepContext`].

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    create_replication_dataservice, deployment_methods, run_deployment_method,
    CreateServiceSteps, DeploymentMethod, DeploymentStepProvider, StepContext,
    CREATE_REPLICATION_DATASERVICE,
};
pub use domain::entities::{PropertyStore, PropertyValue};
pub use domain::ports::{
    ConfigFileRepository, ConfigPathProvider, ConfigStoreError, ConfigStoreResult,
    DeploymentBackend,
};
pub use domain::value_objects::{
    ContentHash, PropertyPath, ServiceKey, DEPLOYMENT_SERVICE, REPL_SERVICES,
};
pub use error::{DeployError, DeployResult, PropertyError};
pub use infrastructure::{EnvConfigPath, FixedConfigPath, TomlConfigRepository};
