//! Isolated test environment for replconf.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use tempfile::TempDir;

use replconf::{
    ContentHash, DeployResult, FixedConfigPath, PropertyStore, StepContext, TomlConfigRepository,
};

use super::RecordingBackend;

static TRACING: Once = Once::new();

/// Route library logs through the test writer (`RUST_LOG` to enable).
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Temp directory holding one persisted `deploy.toml`
pub struct TestEnv {
    dir: TempDir,
    pub config_file: PathBuf,
    pub repository: TomlConfigRepository,
    pub paths: FixedConfigPath,
}

impl TestEnv {
    pub fn new() -> Self {
        init_tracing();
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_file = dir.path().join("deploy.toml");
        Self {
            paths: FixedConfigPath::new(&config_file),
            config_file,
            dir,
            repository: TomlConfigRepository::new(),
        }
    }

    /// Environment whose persisted file starts with `content`
    pub fn with_persisted(content: &str) -> Self {
        let env = Self::new();
        fs::write(&env.config_file, content).expect("write persisted config");
        env
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn read_persisted(&self) -> String {
        fs::read_to_string(&self.config_file).expect("read persisted config")
    }

    pub fn persisted(&self) -> PropertyStore {
        PropertyStore::from_toml_str(&self.read_persisted()).expect("parse persisted config")
    }

    pub fn checksum(&self) -> ContentHash {
        ContentHash::from_bytes(&fs::read(&self.config_file).unwrap_or_default())
    }

    /// Run the create-service step with `config` as the global context
    pub fn run_step(&self, config: &PropertyStore, backend: &RecordingBackend) -> DeployResult<()> {
        let ctx = StepContext::new(config, &self.repository, backend, &self.paths);
        replconf::run_deployment_method(replconf::CREATE_REPLICATION_DATASERVICE, &ctx)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
