//! Scenario: several writers share one persisted file.

use std::sync::{Arc, Barrier};
use std::thread;

use replconf::{ConfigFileRepository, ConfigStoreError, PropertyPath, TomlConfigRepository};

use crate::common::*;

#[test]
fn locked_updates_do_not_lose_writes() {
    let env = TestEnv::with_persisted(SINGLE_SERVICE);
    let file = env.config_file.clone();
    let writers = 8;
    let barrier = Arc::new(Barrier::new(writers));

    let handles: Vec<_> = (0..writers)
        .map(|i| {
            let file = file.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let repo = TomlConfigRepository::new();
                let key = PropertyPath::parse(&format!("writers.w{i}")).unwrap();
                barrier.wait();
                repo.update(&file, &mut |store| store.set_property(&key, i as i64))
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let persisted = env.persisted();
    for i in 0..writers {
        let key = PropertyPath::parse(&format!("writers.w{i}")).unwrap();
        assert!(persisted.contains(&key), "lost write from writer {i}");
    }
}

#[test]
fn stale_compare_and_swap_is_rejected() {
    let env = TestEnv::with_persisted(SINGLE_SERVICE);
    let repo = &env.repository;
    let seen = repo.fingerprint(&env.config_file).unwrap();
    let mut mine = repo.load(&env.config_file).unwrap();

    // Another writer lands first
    let mut theirs = repo.load(&env.config_file).unwrap();
    theirs.set_property(&PropertyPath::parse("hosts.primary").unwrap(), "db2");
    repo.store(&env.config_file, &theirs).unwrap();

    mine.set_property(&PropertyPath::parse("hosts.primary").unwrap(), "db3");
    let err = repo
        .store_if_unchanged(&env.config_file, &mine, &seen)
        .unwrap_err();

    assert!(matches!(err, ConfigStoreError::ConcurrentModification { .. }));
    assert_eq!(env.persisted(), theirs);
}
