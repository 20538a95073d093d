//! Favorite exam ids, persisted as one JSON array under a single storage key.

use crate::storage;
use std::collections::HashSet;
use tracing::warn;

pub const FAVORITES_KEY: &str = "saved_exams";

/// Loads the favorite set once at startup. Missing or corrupt data yields an
/// empty set; favorites are not worth failing startup over.
pub fn load_favorites() -> HashSet<String> {
    match storage::storage_get(FAVORITES_KEY) {
        Some(raw) => deserialize_favorites(&raw),
        None => HashSet::new(),
    }
}

/// Rewrites the whole favorite set on every mutation.
pub fn save_favorites(favorites: &HashSet<String>) {
    let serialized = serialize_favorites(favorites);
    if let Err(err) = storage::storage_set(FAVORITES_KEY, &serialized) {
        warn!("failed to persist favorites: {}", err);
    }
}

/// Idempotent add/remove. Returns true when the exam is a favorite after the
/// toggle.
pub fn toggle_favorite(favorites: &mut HashSet<String>, exam_id: &str) -> bool {
    if favorites.contains(exam_id) {
        favorites.remove(exam_id);
        false
    } else {
        favorites.insert(exam_id.to_string());
        true
    }
}

pub fn serialize_favorites(favorites: &HashSet<String>) -> String {
    let mut ids: Vec<&String> = favorites.iter().collect();
    ids.sort();
    serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string())
}

pub fn deserialize_favorites(raw: &str) -> HashSet<String> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(ids) => ids.into_iter().collect(),
        Err(err) => {
            warn!("discarding corrupt favorites payload: {}", err);
            HashSet::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_then_toggle_restores_original_set() {
        let mut favorites: HashSet<String> = ["1".to_string(), "4".to_string()].into();
        let original = favorites.clone();

        assert!(toggle_favorite(&mut favorites, "7"));
        assert!(favorites.contains("7"));
        assert!(!toggle_favorite(&mut favorites, "7"));
        assert_eq!(favorites, original);
    }

    #[test]
    fn serialization_round_trip_is_order_independent() {
        let favorites: HashSet<String> =
            ["8".to_string(), "2".to_string(), "5".to_string()].into();
        let restored = deserialize_favorites(&serialize_favorites(&favorites));
        assert_eq!(restored, favorites);
    }

    #[test]
    fn empty_set_round_trips() {
        let favorites = HashSet::new();
        assert_eq!(serialize_favorites(&favorites), "[]");
        assert_eq!(deserialize_favorites("[]"), favorites);
    }

    #[test]
    fn corrupt_payload_yields_empty_set() {
        assert!(deserialize_favorites("not json").is_empty());
        assert!(deserialize_favorites("{\"a\":1}").is_empty());
    }
}
