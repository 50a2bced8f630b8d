//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `deployment_steps` - Step registry and the create-service step

pub mod deployment_steps;

pub use deployment_steps::{
    create_replication_dataservice, deployment_methods, run_deployment_method,
    CreateServiceSteps, DeploymentMethod, DeploymentStepProvider, StepContext,
    CREATE_REPLICATION_DATASERVICE,
};
