//! Property tests for the persisted TOML representation.

use proptest::prelude::*;

use replconf::{ConfigFileRepository, PropertyStore, TomlConfigRepository};

use crate::strategies::store;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rendering then parsing yields the same store.
    #[test]
    fn property_toml_text_round_trips(original in store()) {
        let text = original.to_toml_string().unwrap();
        let reparsed = PropertyStore::from_toml_str(&text).unwrap();
        prop_assert_eq!(reparsed, original);
    }

    /// PROPERTY: `store(load(path))` leaves the file's content unchanged.
    #[test]
    fn property_load_store_round_trips(original in store()) {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("deploy.toml");
        let repo = TomlConfigRepository::new();
        repo.store(&file, &original).unwrap();
        let first = std::fs::read_to_string(&file).unwrap();

        let loaded = repo.load(&file).unwrap();
        repo.store(&file, &loaded).unwrap();

        prop_assert_eq!(std::fs::read_to_string(&file).unwrap(), first);
        prop_assert_eq!(repo.load(&file).unwrap(), original);
    }

    /// PROPERTY: parsing arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(s in ".{0,128}") {
        let _ = PropertyStore::from_toml_str(&s);
    }
}
