//! DeploymentBackend port - performs the actual service deployment
//!
//! Owned outside this crate. The call is synchronous and may block for a
//! long time; timeouts and cancellation are the backend's business.

use anyhow::Result;

use crate::domain::entities::PropertyStore;

/// Deploys a replication data service of a given implementation type.
pub trait DeploymentBackend {
    /// Deploy using the fully resolved (merged) configuration.
    ///
    /// Errors are passed through to the orchestrator without interpretation.
    fn deploy_replication_dataservice(
        &self,
        service_type: &str,
        config: &PropertyStore,
    ) -> Result<()>;
}
