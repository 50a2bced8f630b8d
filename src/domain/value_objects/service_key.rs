//! Service key value object
//!
//! Selects one record under the `repl_services` namespace.

use std::fmt;

use super::PropertyPath;

/// Top-level key selecting the active service, and nested key selecting
/// the service implementation type inside each service record.
pub const DEPLOYMENT_SERVICE: &str = "deployment_service";

/// Namespace holding per-service records.
pub const REPL_SERVICES: &str = "repl_services";

/// Identifier of one replication service record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServiceKey(String);

impl ServiceKey {
    /// Returns `None` for an empty key.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `repl_services.<key>`
    pub fn record_path(&self) -> PropertyPath {
        PropertyPath::from_trusted(vec![REPL_SERVICES.to_string(), self.0.clone()])
    }

    /// `repl_services.<key>.deployment_service`
    pub fn service_type_path(&self) -> PropertyPath {
        PropertyPath::from_trusted(vec![
            REPL_SERVICES.to_string(),
            self.0.clone(),
            DEPLOYMENT_SERVICE.to_string(),
        ])
    }

    /// Path of the top-level active service selector.
    pub fn selector_path() -> PropertyPath {
        PropertyPath::from_trusted(vec![DEPLOYMENT_SERVICE.to_string()])
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ServiceKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
