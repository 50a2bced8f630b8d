//! Domain Entities

mod property_store;

pub use property_store::{PropertyStore, PropertyValue};
