//! Integration tests for the local storage backend and favorites
//! persistence.

use examestp::favorites::{deserialize_favorites, serialize_favorites};
use examestp::storage::{storage_delete, storage_get, storage_set};
use std::collections::HashSet;

mod storage_tests {
    use super::*;

    #[test]
    fn test_storage_set_and_get() {
        let key = "test_key_roundtrip";
        let value = r#"["1","4","7"]"#;

        storage_set(key, value).expect("Failed to set storage");

        let retrieved = storage_get(key);
        assert_eq!(retrieved, Some(value.to_string()));

        // Cleanup
        storage_delete(key).expect("Failed to delete");
    }

    #[test]
    fn test_storage_get_nonexistent() {
        let result = storage_get("test_key_nonexistent");
        assert_eq!(result, None);
    }

    #[test]
    fn test_storage_delete() {
        let key = "test_key_to_delete";

        storage_set(key, "value").expect("Failed to set");
        assert!(storage_get(key).is_some());

        storage_delete(key).expect("Failed to delete");
        assert!(storage_get(key).is_none());
    }

    #[test]
    fn test_storage_overwrite_replaces_whole_value() {
        let key = "test_key_overwrite";

        storage_set(key, r#"["1"]"#).expect("Failed to set");
        storage_set(key, r#"["2","3"]"#).expect("Failed to overwrite");

        assert_eq!(storage_get(key), Some(r#"["2","3"]"#.to_string()));

        storage_delete(key).expect("Failed to delete");
    }

    #[test]
    fn test_storage_special_characters_in_key() {
        // Keys get sanitized for filesystem use, so colons are fine.
        let key = "test:key:with:colons";

        storage_set(key, "dark").expect("Failed to set");
        assert_eq!(storage_get(key), Some("dark".to_string()));

        storage_delete(key).expect("Failed to delete");
    }
}

mod favorites_persistence_tests {
    use super::*;

    #[test]
    fn test_favorites_survive_storage_round_trip() {
        let key = "test_saved_exams_roundtrip";
        let favorites: HashSet<String> =
            ["2".to_string(), "5".to_string(), "8".to_string()].into();

        storage_set(key, &serialize_favorites(&favorites)).expect("Failed to persist");

        let raw = storage_get(key).expect("Favorites missing after write");
        let restored = deserialize_favorites(&raw);
        assert_eq!(restored, favorites);

        storage_delete(key).expect("Failed to delete");
    }

    #[test]
    fn test_favorites_payload_is_a_json_array() {
        let favorites: HashSet<String> = ["9".to_string()].into();
        let payload = serialize_favorites(&favorites);

        let parsed: Vec<String> =
            serde_json::from_str(&payload).expect("payload must be a JSON array");
        assert_eq!(parsed, vec!["9".to_string()]);
    }

    #[test]
    fn test_missing_favorites_key_yields_empty_set() {
        assert_eq!(storage_get("test_saved_exams_never_written"), None);
        // load_favorites maps a missing key to an empty set; the
        // deserializer does the same for garbage.
        assert!(deserialize_favorites("garbage").is_empty());
    }
}
