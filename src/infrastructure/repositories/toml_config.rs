//! TOML Config File Repository
//!
//! Implements the ConfigFileRepository port on the local file system.
//!
//! Writers take an exclusive advisory lock on a sibling `<file>.lock` and
//! replace the file atomically (temp file in the same directory, then
//! rename), so a concurrent reader sees either the old or the new content.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::domain::entities::PropertyStore;
use crate::domain::ports::{ConfigFileRepository, ConfigStoreError, ConfigStoreResult};
use crate::domain::value_objects::ContentHash;
use crate::error::PropertyError;

/// TOML-based configuration repository
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlConfigRepository;

impl TomlConfigRepository {
    pub fn new() -> Self {
        Self
    }

    /// `deploy.toml` → `deploy.toml.lock`
    pub fn lock_path(path: &Path) -> PathBuf {
        let mut name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "config".into());
        name.push(".lock");
        path.with_file_name(name)
    }

    fn with_exclusive_lock<T>(
        &self,
        path: &Path,
        f: impl FnOnce() -> ConfigStoreResult<T>,
    ) -> ConfigStoreResult<T> {
        let lock_path = Self::lock_path(path);
        if let Some(parent) = lock_path.parent() {
            create_parent(parent, path)?;
        }

        let lock_file = fs::File::create(&lock_path).map_err(|source| ConfigStoreError::Lock {
            path: lock_path.clone(),
            source,
        })?;
        lock_file
            .lock_exclusive()
            .map_err(|source| ConfigStoreError::Lock {
                path: lock_path.clone(),
                source,
            })?;
        debug!(lock = %lock_path.display(), "acquired config lock");

        let result = f();

        if let Err(e) = lock_file.unlock() {
            warn!(lock = %lock_path.display(), error = %e, "failed to release config lock");
        }
        result
    }

    fn read_bytes(&self, path: &Path) -> ConfigStoreResult<Vec<u8>> {
        match fs::read(path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(source) => Err(ConfigStoreError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn load_unlocked(&self, path: &Path) -> ConfigStoreResult<PropertyStore> {
        let bytes = self.read_bytes(path)?;
        let content = String::from_utf8(bytes).map_err(|e| ConfigStoreError::Corrupted {
            path: path.to_path_buf(),
            source: PropertyError::InvalidFormat {
                message: format!("file is not valid UTF-8: {e}"),
            },
        })?;
        PropertyStore::from_toml_str(&content).map_err(|source| ConfigStoreError::Corrupted {
            path: path.to_path_buf(),
            source,
        })
    }

    fn store_unlocked(&self, path: &Path, store: &PropertyStore) -> ConfigStoreResult<()> {
        let content = store
            .to_toml_string()
            .map_err(|source| ConfigStoreError::Serialization {
                path: path.to_path_buf(),
                source,
            })?;
        write_atomic(path, content.as_bytes())?;
        debug!(path = %path.display(), keys = store.len(), "stored config");
        Ok(())
    }
}

impl ConfigFileRepository for TomlConfigRepository {
    fn load(&self, path: &Path) -> ConfigStoreResult<PropertyStore> {
        self.load_unlocked(path)
    }

    fn store(&self, path: &Path, store: &PropertyStore) -> ConfigStoreResult<()> {
        self.with_exclusive_lock(path, || self.store_unlocked(path, store))
    }

    fn fingerprint(&self, path: &Path) -> ConfigStoreResult<ContentHash> {
        Ok(ContentHash::from_bytes(&self.read_bytes(path)?))
    }

    fn store_if_unchanged(
        &self,
        path: &Path,
        store: &PropertyStore,
        expected: &ContentHash,
    ) -> ConfigStoreResult<ContentHash> {
        self.with_exclusive_lock(path, || {
            let found = self.fingerprint(path)?;
            if &found != expected {
                return Err(ConfigStoreError::ConcurrentModification {
                    path: path.to_path_buf(),
                    expected: expected.clone(),
                    found,
                });
            }
            self.store_unlocked(path, store)?;
            self.fingerprint(path)
        })
    }

    fn update(
        &self,
        path: &Path,
        apply: &mut dyn FnMut(&mut PropertyStore),
    ) -> ConfigStoreResult<()> {
        self.with_exclusive_lock(path, || {
            let mut store = self.load_unlocked(path)?;
            apply(&mut store);
            self.store_unlocked(path, &store)
        })
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn create_parent(dir: &Path, file: &Path) -> ConfigStoreResult<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| ConfigStoreError::Io {
        path: file.to_path_buf(),
        source,
    })
}

/// Write via temp file + rename in the target directory.
fn write_atomic(path: &Path, content: &[u8]) -> ConfigStoreResult<()> {
    let io_err = |source| ConfigStoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = parent_dir(path);
    create_parent(dir, path)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(content).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
