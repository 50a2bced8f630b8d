//! Execution context handed to a deployment step by the orchestrator

use crate::domain::entities::PropertyStore;
use crate::domain::ports::{ConfigFileRepository, ConfigPathProvider, DeploymentBackend};

/// Everything a step may touch.
///
/// The global configuration is read-only for the duration of the step.
#[derive(Clone, Copy)]
pub struct StepContext<'a> {
    /// Global configuration for the current orchestration run
    pub config: &'a PropertyStore,
    /// Persistence of the canonical configuration file
    pub repository: &'a dyn ConfigFileRepository,
    /// Performs the actual deployment
    pub backend: &'a dyn DeploymentBackend,
    /// Locates the canonical configuration file
    pub paths: &'a dyn ConfigPathProvider,
}

impl<'a> StepContext<'a> {
    pub fn new(
        config: &'a PropertyStore,
        repository: &'a dyn ConfigFileRepository,
        backend: &'a dyn DeploymentBackend,
        paths: &'a dyn ConfigPathProvider,
    ) -> Self {
        Self {
            config,
            repository,
            backend,
            paths,
        }
    }
}
