//! Deployment steps
//!
//! Named units of work an orchestrator discovers with
//! [`deployment_methods`] and invokes with [`run_deployment_method`].

mod context;
mod create_service;

pub use context::StepContext;
pub use create_service::{create_replication_dataservice, CREATE_REPLICATION_DATASERVICE};

use serde::Serialize;

use crate::error::{DeployError, DeployResult};

/// Identifies one invocable step
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DeploymentMethod {
    name: String,
}

impl DeploymentMethod {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Steps contributed by this module, in execution order.
pub fn deployment_methods() -> Vec<DeploymentMethod> {
    vec![DeploymentMethod::new(CREATE_REPLICATION_DATASERVICE)]
}

/// Invoke the step registered under `name`.
pub fn run_deployment_method(name: &str, ctx: &StepContext<'_>) -> DeployResult<()> {
    match name {
        CREATE_REPLICATION_DATASERVICE => create_replication_dataservice(ctx),
        _ => Err(DeployError::UnknownDeploymentMethod {
            name: name.to_string(),
        }),
    }
}

/// A group of deployment steps, as seen by an orchestrator
///
/// Stateless; orchestrators hold a list of providers and ask each one for
/// its methods.
pub trait DeploymentStepProvider {
    fn deployment_methods(&self) -> Vec<DeploymentMethod>;

    fn run(&self, method: &DeploymentMethod, ctx: &StepContext<'_>) -> DeployResult<()>;
}

/// Provider for the replication data-service steps
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateServiceSteps;

impl DeploymentStepProvider for CreateServiceSteps {
    fn deployment_methods(&self) -> Vec<DeploymentMethod> {
        deployment_methods()
    }

    fn run(&self, method: &DeploymentMethod, ctx: &StepContext<'_>) -> DeployResult<()> {
        run_deployment_method(method.name(), ctx)
    }
}
