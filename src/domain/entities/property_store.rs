//! Property store entity
//!
//! Ordered, hierarchical key-path → value container. Sub-trees are nested
//! stores; everything else is a leaf value.
//!
//! - `merge` is a top-level overlay: the overlay's value replaces the base's
//!   value wholesale for a shared key (no deep merge)
//! - `merge` never mutates its inputs
//! - Iteration order is the sorted key order, so lookups and serialization
//!   are deterministic
//!
//! A store instance has a single writer; there is no interior locking.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::value_objects::PropertyPath;
use crate::error::PropertyError;

/// A value held in a [`PropertyStore`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Array(Vec<PropertyValue>),
    Tree(PropertyStore),
}

impl PropertyValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_tree(&self) -> Option<&PropertyStore> {
        match self {
            PropertyValue::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    pub fn is_tree(&self) -> bool {
        matches!(self, PropertyValue::Tree(_))
    }

    fn kind(&self) -> &'static str {
        match self {
            PropertyValue::String(_) => "string",
            PropertyValue::Integer(_) => "integer",
            PropertyValue::Float(_) => "float",
            PropertyValue::Boolean(_) => "boolean",
            PropertyValue::Array(_) => "array",
            PropertyValue::Tree(_) => "tree",
        }
    }

    fn try_from_toml(value: toml::Value) -> Result<Self, PropertyError> {
        Ok(match value {
            toml::Value::String(s) => PropertyValue::String(s),
            toml::Value::Integer(i) => PropertyValue::Integer(i),
            toml::Value::Float(f) => PropertyValue::Float(f),
            toml::Value::Boolean(b) => PropertyValue::Boolean(b),
            toml::Value::Array(items) => PropertyValue::Array(
                items
                    .into_iter()
                    .map(Self::try_from_toml)
                    .collect::<Result<_, _>>()?,
            ),
            toml::Value::Table(table) => PropertyValue::Tree(PropertyStore::try_from_table(table)?),
            toml::Value::Datetime(dt) => {
                return Err(PropertyError::InvalidFormat {
                    message: format!("datetime values are not supported (found {dt})"),
                })
            }
        })
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Integer(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Float(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Boolean(value)
    }
}

impl From<PropertyStore> for PropertyValue {
    fn from(value: PropertyStore) -> Self {
        PropertyValue::Tree(value)
    }
}

/// Hierarchical property container
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PropertyStore {
    entries: BTreeMap<String, PropertyValue>,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overlay `overlay` on top of `base`, producing a new store.
    ///
    /// Keys are the union of both stores; on conflict the overlay wins.
    pub fn merge(base: &PropertyStore, overlay: &PropertyStore) -> PropertyStore {
        let mut entries = base.entries.clone();
        entries.extend(
            overlay
                .entries
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        PropertyStore { entries }
    }

    /// Method form of [`PropertyStore::merge`] with `self` as the base.
    pub fn merged_with(&self, overlay: &PropertyStore) -> PropertyStore {
        Self::merge(self, overlay)
    }

    /// Point lookup.
    pub fn get(&self, path: &PropertyPath) -> Result<&PropertyValue, PropertyError> {
        self.lookup(path).ok_or_else(|| PropertyError::KeyNotFound {
            path: path.to_string(),
        })
    }

    /// Point lookup of a string leaf.
    pub fn get_str(&self, path: &PropertyPath) -> Result<&str, PropertyError> {
        let value = self.get(path)?;
        value.as_str().ok_or_else(|| PropertyError::NotAString {
            path: path.to_string(),
            found: value.kind(),
        })
    }

    /// Lookup falling back to `default` when the path is absent.
    pub fn get_or<'a>(
        &'a self,
        path: &PropertyPath,
        default: &'a PropertyValue,
    ) -> &'a PropertyValue {
        self.lookup(path).unwrap_or(default)
    }

    pub fn contains(&self, path: &PropertyPath) -> bool {
        self.lookup(path).is_some()
    }

    fn lookup(&self, path: &PropertyPath) -> Option<&PropertyValue> {
        let (parents, last) = path.split_last();
        let mut current = self;
        for segment in parents {
            current = current.entries.get(segment)?.as_tree()?;
        }
        current.entries.get(last)
    }

    /// Clone of the sub-tree at `prefix`; empty if absent or not a tree.
    pub fn scoped(&self, prefix: &PropertyPath) -> PropertyStore {
        match self.lookup(prefix) {
            Some(PropertyValue::Tree(tree)) => tree.clone(),
            _ => PropertyStore::new(),
        }
    }

    /// In-place point write.
    ///
    /// Missing intermediate trees are created; an intermediate leaf is
    /// replaced by a tree.
    pub fn set_property(&mut self, path: &PropertyPath, value: impl Into<PropertyValue>) {
        let (parents, last) = path.split_last();
        self.set_at(parents, last, value.into());
    }

    fn set_at(&mut self, parents: &[String], last: &str, value: PropertyValue) {
        match parents.split_first() {
            None => {
                self.entries.insert(last.to_string(), value);
            }
            Some((head, rest)) => {
                let mut child = match self.entries.remove(head) {
                    Some(PropertyValue::Tree(tree)) => tree,
                    _ => PropertyStore::new(),
                };
                child.set_at(rest, last, value);
                self.entries.insert(head.clone(), PropertyValue::Tree(child));
            }
        }
    }

    /// Replace the whole sub-tree at `prefix`.
    pub fn set_scoped(&mut self, prefix: &PropertyPath, tree: PropertyStore) {
        self.set_property(prefix, PropertyValue::Tree(tree));
    }

    /// Remove and return the value at `path`.
    pub fn remove_property(&mut self, path: &PropertyPath) -> Option<PropertyValue> {
        let (parents, last) = path.split_last();
        let mut current: &mut PropertyStore = self;
        for segment in parents {
            current = match current.entries.get_mut(segment)? {
                PropertyValue::Tree(tree) => tree,
                _ => return None,
            };
        }
        current.entries.remove(last)
    }

    /// Top-level keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Top-level entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse the persisted TOML representation.
    pub fn from_toml_str(content: &str) -> Result<Self, PropertyError> {
        let table: toml::Table = content.parse().map_err(|e: toml::de::Error| {
            PropertyError::InvalidFormat {
                message: e.to_string(),
            }
        })?;
        Self::try_from_table(table)
    }

    /// Render the persisted TOML representation.
    pub fn to_toml_string(&self) -> Result<String, PropertyError> {
        toml::to_string_pretty(self).map_err(|e| PropertyError::InvalidFormat {
            message: e.to_string(),
        })
    }

    fn try_from_table(table: toml::Table) -> Result<Self, PropertyError> {
        let entries = table
            .into_iter()
            .map(|(key, value)| Ok((key, PropertyValue::try_from_toml(value)?)))
            .collect::<Result<_, PropertyError>>()?;
        Ok(Self { entries })
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyStore
where
    K: Into<String>,
    V: Into<PropertyValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
