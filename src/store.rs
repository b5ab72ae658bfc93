//! Shop State Store
//!
//! Favorites and cart ids held in a reactive_stores store. Components read
//! the fields they need and re-render on change; mutators write through to
//! local storage so other tabs (and the next mount) see the same lists.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::UiConfig;
use crate::storage;

/// Persisted shop lists with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShopState {
    /// Favorited item ids, in insertion order
    pub favorites: Vec<String>,
    /// Cart item ids; the same id may appear more than once
    pub cart: Vec<String>,
}

impl ShopState {
    /// Load both lists from local storage
    pub fn load(config: &UiConfig) -> Self {
        let favorites = storage::read_raw_lossy(&config.favorites_key);
        let cart = storage::read_raw_lossy(&config.cart_key);
        Self::from_stored(config, favorites.as_deref(), cart.as_deref())
    }

    /// Build from the raw stored texts; malformed entries count as empty
    pub fn from_stored(config: &UiConfig, favorites: Option<&str>, cart: Option<&str>) -> Self {
        Self {
            favorites: storage::parse_id_list_lossy(&config.favorites_key, favorites),
            cart: storage::parse_id_list_lossy(&config.cart_key, cart),
        }
    }
}

/// Window events after which both lists are re-read
pub fn refresh_events(config: &UiConfig) -> [&str; 3] {
    ["storage", &config.favorites_event, &config.cart_event]
}

/// Whether a `storage` event for `key` concerns our lists.
/// `None` means the whole storage area was cleared.
pub fn refreshes_on(key: Option<&str>, config: &UiConfig) -> bool {
    match key {
        None => true,
        Some(k) => k == config.favorites_key || k == config.cart_key,
    }
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;

/// Get the shop store from context
pub fn use_shop_store() -> ShopStore {
    expect_context::<ShopStore>()
}

// ========================
// List Helpers
// ========================

/// Add `id` if absent, remove it if present. Returns whether it is now in the list.
pub fn toggle_id(list: &mut Vec<String>, id: &str) -> bool {
    if let Some(pos) = list.iter().position(|x| x == id) {
        list.remove(pos);
        false
    } else {
        list.push(id.to_string());
        true
    }
}

/// Remove the first occurrence of `id`. Returns whether anything was removed.
pub fn remove_first(list: &mut Vec<String>, id: &str) -> bool {
    match list.iter().position(|x| x == id) {
        Some(pos) => {
            list.remove(pos);
            true
        }
        None => false,
    }
}

// ========================
// Store Helper Functions
// ========================

/// Re-read both lists from local storage (cross-tab or external mutation)
pub fn store_refresh(store: &ShopStore, config: &UiConfig) {
    let fresh = ShopState::load(config);
    log::debug!(
        "[STORE] Refreshed: {} favorites, {} in cart",
        fresh.favorites.len(),
        fresh.cart.len()
    );
    store.favorites().set(fresh.favorites);
    store.cart().set(fresh.cart);
}

fn persist(key: &str, ids: &[String]) {
    if let Err(err) = storage::write_id_list(key, ids) {
        log::warn!("[STORE] Could not persist `{}`: {}", key, err);
    }
}

/// Toggle a favorite; returns whether the item is now favorited
pub fn store_toggle_favorite(store: &ShopStore, config: &UiConfig, id: &str) -> bool {
    let now_favorite = toggle_id(&mut store.favorites().write(), id);
    persist(&config.favorites_key, &store.favorites().read_untracked());
    now_favorite
}

pub fn store_add_to_cart(store: &ShopStore, config: &UiConfig, id: &str) {
    store.cart().write().push(id.to_string());
    persist(&config.cart_key, &store.cart().read_untracked());
}

pub fn store_remove_from_cart(store: &ShopStore, config: &UiConfig, id: &str) {
    if remove_first(&mut store.cart().write(), id) {
        persist(&config.cart_key, &store.cart().read_untracked());
    }
}

pub fn store_clear_cart(store: &ShopStore, config: &UiConfig) {
    store.cart().write().clear();
    persist(&config.cart_key, &[]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_toggle_id() {
        let mut list = ids(&["a", "b"]);
        assert!(toggle_id(&mut list, "c"));
        assert_eq!(list, ids(&["a", "b", "c"]));
        assert!(!toggle_id(&mut list, "a"));
        assert_eq!(list, ids(&["b", "c"]));
    }

    #[test]
    fn test_refreshes_on_storage_keys() {
        let config = UiConfig::default();
        assert!(refreshes_on(None, &config));
        assert!(refreshes_on(Some("favorites"), &config));
        assert!(refreshes_on(Some("cart"), &config));
        assert!(!refreshes_on(Some("theme"), &config));

        let custom = UiConfig { cart_key: "bag".into(), ..UiConfig::default() };
        assert!(refreshes_on(Some("bag"), &custom));
        assert!(!refreshes_on(Some("cart"), &custom));
    }

    #[test]
    fn test_refresh_events() {
        let config = UiConfig::default();
        assert_eq!(refresh_events(&config), ["storage", "favoritesUpdated", "cartUpdated"]);
    }

    #[test]
    fn test_counts_follow_stored_lengths() {
        let config = UiConfig::default();
        let state = ShopState::from_stored(&config, Some(r#"["a", "b", 3]"#), Some(r#"["x", "x"]"#));
        assert_eq!(state.favorites.len(), 3);
        assert_eq!(state.cart.len(), 2);

        let state = ShopState::from_stored(&config, Some("{broken"), None);
        assert_eq!(state.favorites.len(), 0);
        assert_eq!(state.cart.len(), 0);
    }

    #[test]
    fn test_remove_first_keeps_duplicates() {
        let mut list = ids(&["x", "y", "x"]);
        assert!(remove_first(&mut list, "x"));
        assert_eq!(list, ids(&["y", "x"]));
        assert!(!remove_first(&mut list, "z"));
        assert_eq!(list.len(), 2);
    }
}
