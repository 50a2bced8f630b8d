//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod hash;
mod property_path;
mod service_key;

pub use hash::ContentHash;
pub use property_path::PropertyPath;
pub use service_key::{ServiceKey, DEPLOYMENT_SERVICE, REPL_SERVICES};
