//! Repository Integration Tests
//!
//! Tests for ChecklistRepository with in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::domain::{
        BallastType, ChecklistState, DomainError, DomainResult, Selections, TentSize, Toggle,
    };
    use crate::repository::{
        ballast_key, init_db, state_key, ChecklistRepository, KeyValueStorage, MemoryStorage,
        SqliteStorage,
    };
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    fn setup_test_db() -> ChecklistRepository {
        // Use in-memory database for tests
        let db_path = PathBuf::from(":memory:");
        let conn = init_db(&db_path).expect("Failed to init test DB");
        ChecklistRepository::new(Arc::new(SqliteStorage::new(Arc::new(Mutex::new(conn)))))
    }

    fn sample_state() -> ChecklistState {
        let mut state = ChecklistState::new();
        state.set("towels", true);
        state.set("ropes-2x", true);
        state.set("ladders", false);
        state
    }

    /// Storage that fails every call
    struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get_item(&self, _key: &str) -> DomainResult<Option<String>> {
            Err(DomainError::Storage("unavailable".to_string()))
        }
        fn set_item(&self, _key: &str, _value: &str) -> DomainResult<()> {
            Err(DomainError::Storage("quota exceeded".to_string()))
        }
        fn remove_item(&self, _key: &str) -> DomainResult<()> {
            Err(DomainError::Storage("unavailable".to_string()))
        }
        fn keys_with_prefix(&self, _prefix: &str) -> DomainResult<Vec<String>> {
            Err(DomainError::Storage("unavailable".to_string()))
        }
    }

    #[test]
    fn test_state_round_trip() {
        let repo = setup_test_db();
        let state = sample_state();

        repo.save_state(TentSize::S30x30, &state);

        assert_eq!(repo.load_state(TentSize::S30x30), state);
    }

    #[test]
    fn test_first_visit_is_empty() {
        let repo = setup_test_db();
        assert!(repo.load_state(TentSize::S40x60).is_empty());
        assert_eq!(repo.load_selections(TentSize::S40x60), Selections::default());
    }

    #[test]
    fn test_sizes_do_not_share_state() {
        let repo = setup_test_db();
        repo.save_state(TentSize::S30x30, &sample_state());
        repo.save_ballast_type(TentSize::S30x30, BallastType::Concrete);

        assert!(repo.load_state(TentSize::S30x45).is_empty());
        assert_eq!(repo.load_ballast_type(TentSize::S30x45), None);
    }

    #[test]
    fn test_save_overwrites() {
        let repo = setup_test_db();
        repo.save_state(TentSize::S30x60, &sample_state());
        let mut next = ChecklistState::new();
        next.set("eaves", true);
        repo.save_state(TentSize::S30x60, &next);

        assert_eq!(repo.load_state(TentSize::S30x60), next);
    }

    #[test]
    fn test_selection_flags_persist() {
        let repo = setup_test_db();
        repo.save_ballast_type(TentSize::S30x75, BallastType::Stakes);
        repo.save_walls_option(TentSize::S30x75, Toggle::Yes);
        repo.save_lighting_option(TentSize::S30x75, Toggle::No);

        assert_eq!(
            repo.load_selections(TentSize::S30x75),
            Selections::new(Some(BallastType::Stakes), Some(Toggle::Yes), Some(Toggle::No))
        );

        repo.clear_walls_option(TentSize::S30x75);
        assert_eq!(repo.load_walls_option(TentSize::S30x75), None);
    }

    #[test]
    fn test_reset_clears_all_four() {
        let repo = setup_test_db();
        let size = TentSize::S40x40;
        repo.save_state(size, &sample_state());
        repo.save_ballast_type(size, BallastType::Concrete);
        repo.save_walls_option(size, Toggle::Yes);
        repo.save_lighting_option(size, Toggle::Yes);

        repo.reset(size);

        assert!(repo.load_state(size).is_empty());
        assert_eq!(repo.load_selections(size), Selections::default());
    }

    #[test]
    fn test_corrupt_json_degrades_to_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(&state_key(TentSize::S30x30), "{not json").unwrap();
        let repo = ChecklistRepository::new(storage);

        assert!(repo.load_state(TentSize::S30x30).is_empty());
    }

    #[test]
    fn test_wrong_shape_degrades_to_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(&state_key(TentSize::S30x30), "[1, 2, 3]").unwrap();
        let repo = ChecklistRepository::new(storage);

        assert!(repo.load_state(TentSize::S30x30).is_empty());
    }

    #[test]
    fn test_unknown_flag_reads_as_unset() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(&ballast_key(TentSize::S30x30), "sandbags").unwrap();
        let repo = ChecklistRepository::new(storage);

        assert_eq!(repo.load_ballast_type(TentSize::S30x30), None);
    }

    #[test]
    fn test_broken_storage_never_propagates() {
        let repo = ChecklistRepository::new(Arc::new(BrokenStorage));
        let size = TentSize::S30x30;

        repo.save_state(size, &sample_state());
        repo.save_ballast_type(size, BallastType::Stakes);
        repo.reset(size);

        assert!(repo.load_state(size).is_empty());
        assert_eq!(repo.load_selections(size), Selections::default());
        assert!(repo.sizes_with_saved_state().is_empty());
    }

    #[test]
    fn test_sizes_with_saved_state_ignores_flag_keys() {
        let repo = setup_test_db();
        repo.save_state(TentSize::S40x100, &sample_state());
        repo.save_state(TentSize::S30x45, &sample_state());
        repo.save_ballast_type(TentSize::S30x60, BallastType::Stakes);

        assert_eq!(
            repo.sizes_with_saved_state(),
            vec![TentSize::S30x45, TentSize::S40x100]
        );
    }

    #[test]
    fn test_file_backed_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("checklist.db");

        {
            let conn = init_db(&db_path).unwrap();
            let storage = SqliteStorage::new(Arc::new(Mutex::new(conn)));
            let repo = ChecklistRepository::new(Arc::new(storage));
            repo.save_state(TentSize::S30x30, &sample_state());
            repo.save_lighting_option(TentSize::S30x30, Toggle::Yes);
        }

        let conn = init_db(&db_path).unwrap();
        let storage = SqliteStorage::new(Arc::new(Mutex::new(conn)));
        let repo = ChecklistRepository::new(Arc::new(storage));
        assert_eq!(repo.load_state(TentSize::S30x30), sample_state());
        assert_eq!(repo.load_lighting_option(TentSize::S30x30), Some(Toggle::Yes));
    }
}
