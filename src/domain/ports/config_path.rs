//! ConfigPathProvider port - locates the persisted configuration file

use std::path::PathBuf;

/// Supplies the path of the persisted configuration file.
///
/// Injected through the step context instead of a process-wide singleton.
pub trait ConfigPathProvider {
    fn config_filename(&self) -> PathBuf;
}
