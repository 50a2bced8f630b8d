//! Create Replication Data Service step
//!
//! 1. Resolve the active service key from `deployment_service`
//! 2. Overlay `repl_services.<key>` on the global configuration
//! 3. Resolve the service implementation type
//! 4. Snapshot `repl_services.<key>` as currently persisted on disk
//! 5. Deploy through the backend with the merged view
//! 6. Reload the persisted store, put the snapshot back under
//!    `repl_services.<key>`, and write it (one locked read-modify-write)
//!
//! Only the backend ever sees the merged view. Neither it nor the context's
//! copy of the service record reaches the persisted file.

use tracing::{debug, info};

use crate::domain::entities::{PropertyStore, PropertyValue};
use crate::domain::value_objects::ServiceKey;
use crate::error::{DeployError, DeployResult, PropertyError};

use super::StepContext;

/// Name under which the orchestrator invokes this step
pub const CREATE_REPLICATION_DATASERVICE: &str = "create_replication_dataservice";

/// Run the step against `ctx`.
///
/// Any failure aborts immediately. Failures before the final write leave
/// the persisted file untouched.
pub fn create_replication_dataservice(ctx: &StepContext<'_>) -> DeployResult<()> {
    info!("Write the replication service configuration");

    let service_key = resolve_service_key(ctx.config)?;
    let record_path = service_key.record_path();

    let service_config = PropertyStore::merge(ctx.config, &ctx.config.scoped(&record_path));

    let service_type = resolve_service_type(ctx.config, &service_key)?;

    let config_file = ctx.paths.config_filename();
    let persisted_record: Option<PropertyValue> = ctx
        .repository
        .load(&config_file)?
        .get(&record_path)
        .ok()
        .cloned();

    debug!(
        service = %service_key,
        service_type = %service_type,
        keys = service_config.len(),
        persisted = persisted_record.is_some(),
        "deploying replication data service"
    );

    ctx.backend
        .deploy_replication_dataservice(&service_type, &service_config)
        .map_err(|reason| DeployError::Backend {
            service: service_key.to_string(),
            service_type: service_type.clone(),
            reason,
        })?;

    ctx.repository
        .update(&config_file, &mut |stored| match &persisted_record {
            Some(record) => stored.set_property(&record_path, record.clone()),
            None => {
                stored.remove_property(&record_path);
            }
        })?;

    info!(
        service = %service_key,
        path = %config_file.display(),
        "restored persisted service record"
    );
    Ok(())
}

fn resolve_service_key(config: &PropertyStore) -> DeployResult<ServiceKey> {
    match config.get_str(&ServiceKey::selector_path()) {
        Ok(key) => ServiceKey::new(key).ok_or(DeployError::MissingServiceKey),
        Err(PropertyError::KeyNotFound { .. }) => Err(DeployError::MissingServiceKey),
        Err(e) => Err(e.into()),
    }
}

fn resolve_service_type(config: &PropertyStore, key: &ServiceKey) -> DeployResult<String> {
    match config.get_str(&key.service_type_path()) {
        Ok(service_type) if !service_type.is_empty() => Ok(service_type.to_string()),
        Ok(_) | Err(PropertyError::KeyNotFound { .. }) => Err(DeployError::MissingServiceType {
            service: key.to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}
