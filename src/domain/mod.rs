//! Domain Layer
//!
//! Configuration model and the boundaries of the deployment step, free of
//! file and network I/O.
//!
//! - `entities/` - `PropertyStore` and its values
//! - `value_objects/` - `PropertyPath`, `ServiceKey`, `ContentHash`
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod value_objects;
