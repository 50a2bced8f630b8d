//! ConfigFileRepository port - persistence of the canonical property store
//!
//! The persisted file is the single source of truth between orchestrator
//! runs. It is read and written in separate operations, so callers that
//! modify it should go through [`ConfigFileRepository::update`] or
//! [`ConfigFileRepository::store_if_unchanged`] rather than a bare
//! `load` followed by `store`.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::PropertyStore;
use crate::domain::value_objects::ContentHash;
use crate::error::PropertyError;

/// Result type for config file operations
pub type ConfigStoreResult<T> = Result<T, ConfigStoreError>;

/// Config file operation errors
#[derive(Error, Debug)]
pub enum ConfigStoreError {
    /// Reading or writing the file failed
    #[error("failed to access config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not a valid property store
    #[error("config file {} is corrupted: {source}", .path.display())]
    Corrupted {
        path: PathBuf,
        #[source]
        source: PropertyError,
    },

    /// Store could not be rendered to the persisted format
    #[error("failed to serialize config for {}: {source}", .path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: PropertyError,
    },

    /// The advisory lock guarding the file could not be taken
    #[error("failed to lock config file {}: {source}", .path.display())]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content changed between read and write
    #[error(
        "config file {} changed since it was read (expected {expected}, found {found})",
        .path.display()
    )]
    ConcurrentModification {
        path: PathBuf,
        expected: ContentHash,
        found: ContentHash,
    },
}

/// Abstract repository for the persisted configuration file
///
/// A missing file loads as an empty store.
pub trait ConfigFileRepository {
    /// Load the store at `path`
    fn load(&self, path: &Path) -> ConfigStoreResult<PropertyStore>;

    /// Replace the file at `path` with `store`
    fn store(&self, path: &Path, store: &PropertyStore) -> ConfigStoreResult<()>;

    /// Version tag of the current file content
    fn fingerprint(&self, path: &Path) -> ConfigStoreResult<ContentHash>;

    /// Compare-and-swap write: store only if the file still matches `expected`.
    ///
    /// Returns the fingerprint of the newly written content.
    ///
    /// The default implementation checks then writes without holding a lock.
    fn store_if_unchanged(
        &self,
        path: &Path,
        store: &PropertyStore,
        expected: &ContentHash,
    ) -> ConfigStoreResult<ContentHash> {
        let found = self.fingerprint(path)?;
        if &found != expected {
            return Err(ConfigStoreError::ConcurrentModification {
                path: path.to_path_buf(),
                expected: expected.clone(),
                found,
            });
        }
        self.store(path, store)?;
        self.fingerprint(path)
    }

    /// Read-modify-write of the file at `path`.
    ///
    /// The default implementation is a plain load/apply/store; implementations
    /// backed by shared storage serialize it against other writers.
    fn update(
        &self,
        path: &Path,
        apply: &mut dyn FnMut(&mut PropertyStore),
    ) -> ConfigStoreResult<()> {
        let mut store = self.load(path)?;
        apply(&mut store);
        self.store(path, &store)
    }
}
