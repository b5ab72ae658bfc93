//! Favorites and cart pages, both backed by the shop store.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{
    store_clear_cart, store_remove_from_cart, store_toggle_favorite, use_shop_store,
    ShopStateStoreFields,
};

/// Cart ids paired with their position; duplicates stay distinct rows
pub fn cart_rows(ids: Vec<String>) -> Vec<(usize, String)> {
    ids.into_iter().enumerate().collect()
}

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_shop_store();

    view! {
        <div class="container mx-auto px-4 page-body">
            <h1 class="text-2xl font-bold mb-6">"Favorites"</h1>
            <Show
                when=move || !store.favorites().read().is_empty()
                fallback=|| view! { <p class="empty-state">"Nothing saved yet."</p> }
            >
                <ul class="saved-list">
                    <For
                        each=move || store.favorites().get()
                        key=|id| id.clone()
                        children=move |id| {
                            let label = id.clone();
                            view! {
                                <li class="saved-row">
                                    <span>{label}</span>
                                    <button
                                        class="remove-btn"
                                        on:click=move |_| {
                                            ctx.with_config(|c| store_toggle_favorite(&store, c, &id));
                                        }
                                    >
                                        "Remove"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}

#[component]
pub fn CartPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_shop_store();

    view! {
        <div class="container mx-auto px-4 page-body">
            <h1 class="text-2xl font-bold mb-6">"Cart"</h1>
            <Show
                when=move || !store.cart().read().is_empty()
                fallback=|| view! { <p class="empty-state">"Your cart is empty."</p> }
            >
                // Same id may appear twice, so rows are keyed by position
                <ul class="saved-list">
                    <For
                        each=move || cart_rows(store.cart().get())
                        key=|(pos, id)| (*pos, id.clone())
                        children=move |(_, id)| {
                            let label = id.clone();
                            view! {
                                <li class="saved-row">
                                    <span>{label}</span>
                                    <button
                                        class="remove-btn"
                                        on:click=move |_| ctx.with_config(|c| store_remove_from_cart(&store, c, &id))
                                    >
                                        "Remove"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
                <button
                    class="clear-btn"
                    on:click=move |_| ctx.with_config(|c| store_clear_cart(&store, c))
                >
                    "Clear cart"
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_rows_keep_duplicates_apart() {
        let rows = cart_rows(vec!["sku-1".into(), "sku-2".into(), "sku-1".into()]);
        assert_eq!(
            rows,
            vec![
                (0, "sku-1".to_string()),
                (1, "sku-2".to_string()),
                (2, "sku-1".to_string()),
            ]
        );
        assert!(cart_rows(Vec::new()).is_empty());
    }
}
