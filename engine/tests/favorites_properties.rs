use engine::LookId;
use engine::favorites::{FavoritesStore, MemoryStorage};
use proptest::prelude::*;
use serde_json::json;

fn record(id: &str, hexes: &[String]) -> serde_json::Value {
    json!({
        "id": id,
        "mood": "Coquette",
        "palette": hexes,
        "originalPalette": hexes,
        "products": {"face": [], "eyes": [], "lips": []}
    })
}

fn palette() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("#[0-9A-F]{6}", 5)
}

proptest! {
    #[test]
    fn test_saved_favorites_reload_unchanged(
        palettes in prop::collection::vec(palette(), 0..8)
    ) {
        let records: Vec<_> = palettes
            .iter()
            .enumerate()
            .map(|(i, p)| record(&format!("look-{i}"), p))
            .collect();
        let storage = MemoryStorage::with_contents(serde_json::to_string(&records).unwrap());

        let store = FavoritesStore::open(storage.clone());
        prop_assert_eq!(store.len(), palettes.len());
        prop_assert!(store.load_report().recovered.is_none());

        let reopened = FavoritesStore::open(storage);
        prop_assert_eq!(reopened.list(), store.list());
    }

    #[test]
    fn test_removal_leaves_other_favorites(
        palettes in prop::collection::vec(palette(), 1..8),
        pick in any::<prop::sample::Index>()
    ) {
        let records: Vec<_> = palettes
            .iter()
            .enumerate()
            .map(|(i, p)| record(&format!("look-{i}"), p))
            .collect();
        let storage = MemoryStorage::with_contents(serde_json::to_string(&records).unwrap());
        let mut store = FavoritesStore::open(storage.clone());

        let removed = LookId::from(format!("look-{}", pick.index(palettes.len())));
        prop_assert!(store.remove(&removed).unwrap());

        let reopened = FavoritesStore::open(storage);
        prop_assert_eq!(reopened.len(), palettes.len() - 1);
        prop_assert!(reopened.get(&removed).is_none());
    }
}
