//! Scenario: failures abort the step and leave the persisted file alone.

use replconf::{DeployError, PropertyPath, PropertyStore};

use crate::common::*;

#[test]
fn missing_service_key_touches_nothing() {
    let env = TestEnv::with_persisted(NO_ACTIVE_SERVICE);
    let before = env.checksum();
    let config = env.persisted();
    let backend = RecordingBackend::new();

    let err = env.run_step(&config, &backend).unwrap_err();

    assert!(matches!(err, DeployError::MissingServiceKey));
    assert!(backend.calls.borrow().is_empty());
    assert_eq!(env.checksum(), before);
    assert!(!env.root().join("deploy.toml.lock").exists());
}

#[test]
fn missing_service_type_touches_nothing() {
    let env = TestEnv::with_persisted(SINGLE_SERVICE);
    let before = env.checksum();
    let mut config = env.persisted();
    config.remove_property(&PropertyPath::parse("repl_services.svc1.deployment_service").unwrap());
    let backend = RecordingBackend::new();

    let err = env.run_step(&config, &backend).unwrap_err();

    assert!(matches!(err, DeployError::MissingServiceType { .. }));
    assert!(backend.calls.borrow().is_empty());
    assert_eq!(env.checksum(), before);
}

#[test]
fn backend_failure_is_surfaced_verbatim() {
    let env = TestEnv::with_persisted(SINGLE_SERVICE);
    let before = env.checksum();
    let config = env.persisted();
    let backend = RecordingBackend::failing("replicator exited with status 1");

    let err = env.run_step(&config, &backend).unwrap_err();

    assert!(err.to_string().contains("replicator exited with status 1"));
    assert!(matches!(err, DeployError::Backend { .. }));
    assert_eq!(env.checksum(), before);
}

#[test]
fn corrupted_persisted_file_aborts_before_deploying() {
    let env = TestEnv::with_persisted("deployment_service = \"svc1\"\n[repl_services\n");
    let config = PropertyStore::from_toml_str(SINGLE_SERVICE).unwrap();
    let before = env.checksum();
    let backend = RecordingBackend::new();

    let err = env.run_step(&config, &backend).unwrap_err();

    assert!(matches!(
        err,
        DeployError::Persistence(replconf::ConfigStoreError::Corrupted { .. })
    ));
    assert!(backend.calls.borrow().is_empty());
    assert_eq!(env.checksum(), before);
}

#[test]
fn unknown_method_is_rejected() {
    let env = TestEnv::with_persisted(SINGLE_SERVICE);
    let config = env.persisted();
    let backend = RecordingBackend::new();
    let ctx = replconf::StepContext::new(&config, &env.repository, &backend, &env.paths);

    let err = replconf::run_deployment_method("create_cluster", &ctx).unwrap_err();

    assert!(matches!(err, DeployError::UnknownDeploymentMethod { .. }));
}
