//! Storefront Header
//!
//! Fixed site header: secondary links, logo, category navigation with a
//! hover mega-menu, search, and favorites/cart badges. Hides while the
//! page scrolls down and reappears on scroll up or near the top.

mod badges;
mod mega_menu;
mod search;
mod slug;
mod visibility;

use badges::BadgeLink;
use mega_menu::MegaMenu;
use search::SearchBar;
use visibility::ScrollTracker;

pub use slug::slugify;

use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

use crate::catalog::NAV_CATEGORIES;
use crate::context::use_app_context;
use crate::routes;
use crate::store::{refresh_events, refreshes_on, store_refresh, use_shop_store, ShopStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_shop_store();
    let config = ctx.config();
    let catalog = ctx.catalog();
    let navigate = use_navigate();

    let menu = RwSignal::new(MegaMenu::default());
    let dismiss_timer = StoredValue::new_local(None::<Timeout>);
    let dismiss_delay = config.dismiss_delay_ms;

    let tracker = StoredValue::new(ScrollTracker::new(config.pin_band_px));
    let (header_visible, set_header_visible) = signal(true);

    // ---- Badge counters ----
    // Local lists are read on mount; the store is the live source after that.
    store_refresh(&store, &config);

    let [storage_event, favorites_event, cart_event] = refresh_events(&config);
    let storage_handle = window_event_listener_untyped(storage_event, move |ev| {
        let key = ev.dyn_ref::<web_sys::StorageEvent>().and_then(|e| e.key());
        ctx.with_config(|c| {
            if refreshes_on(key.as_deref(), c) {
                store_refresh(&store, c);
            }
        });
    });
    let favorites_handle = window_event_listener_untyped(favorites_event, move |_| {
        ctx.with_config(|c| store_refresh(&store, c));
    });
    let cart_handle = window_event_listener_untyped(cart_event, move |_| {
        ctx.with_config(|c| store_refresh(&store, c));
    });

    // ---- Scroll direction ----
    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or(0.0);
        let visible = tracker.try_update_value(|t| t.observe(y)).unwrap_or(true);
        if visible != header_visible.get_untracked() {
            set_header_visible.set(visible);
        }
    });

    on_cleanup(move || {
        storage_handle.remove();
        favorites_handle.remove();
        cart_handle.remove();
        scroll_handle.remove();
        // Cancel a pending dismissal so it cannot fire into a disposed signal
        dismiss_timer.try_update_value(|timer| {
            if let Some(timer) = timer.take() {
                timer.cancel();
            }
        });
        log::debug!("[HEADER] Unmounted, listeners removed");
    });

    // ---- Mega-menu ----
    let cancel_dismiss = move || {
        dismiss_timer.update_value(|timer| {
            if let Some(timer) = timer.take() {
                timer.cancel();
            }
        });
    };

    let on_category_enter = move |key: &'static str| {
        cancel_dismiss();
        menu.update(|m| m.enter_category(key));
    };

    let on_category_leave = move || {
        let Some(token) = menu.try_update(MegaMenu::leave_trigger) else { return };
        let timer = Timeout::new(dismiss_delay, move || {
            menu.try_update(|m| m.dismiss_elapsed(token));
        });
        // Replacing the slot drops (cancels) any older timer
        dismiss_timer.set_value(Some(timer));
    };

    let on_panel_enter = move |_| {
        cancel_dismiss();
        menu.update(MegaMenu::enter_panel);
    };

    let on_panel_leave = move |_| {
        cancel_dismiss();
        menu.update(MegaMenu::leave_panel);
    };

    // Hovered key, only when the catalog has a tree for it
    let open_category = Memo::new(move |_| {
        menu.with(|m| m.hovered().map(str::to_string))
            .filter(|key| catalog.with_value(|tree| tree.has(key)))
    });

    let favorites_count = Signal::derive(move || store.favorites().read().len());
    let cart_count = Signal::derive(move || store.cart().read().len());

    let header_class = move || {
        let offset = if header_visible.get() { "translate-y-0" } else { "-translate-y-full" };
        format!(
            "fixed top-0 left-0 right-0 z-50 bg-white shadow-md transition-transform duration-300 ease-in-out {}",
            offset
        )
    };

    view! {
        <header class=header_class>
            // Top row: secondary navigation
            <div class="bg-gray-100 py-2">
                <div class="container mx-auto px-4 flex justify-end">
                    <nav class="flex gap-6 text-sm">
                        <A href="/help" attr:class="hover:text-gray-600">"Help"</A>
                        <A href="/join" attr:class="hover:text-gray-600">"Join Us"</A>
                        <A href="/auth" attr:class="hover:text-gray-600">"Sign In"</A>
                    </nav>
                </div>
            </div>

            // Primary row
            <div class="container mx-auto px-4 py-4">
                <div class="flex items-center justify-between">
                    <A href=routes::HOME attr:class="text-2xl font-bold text-black">"TANDA SHOES"</A>

                    <nav class="flex gap-8">
                        {NAV_CATEGORIES.iter().map(|cat| {
                            let key = cat.key;
                            let has_menu = cat.has_menu;
                            view! {
                                <div
                                    class="relative"
                                    on:mouseenter=move |_| if has_menu { on_category_enter(key) }
                                    on:mouseleave=move |_| on_category_leave()
                                >
                                    <A href=routes::category_url(key) attr:class="text-gray-700 hover:text-black font-medium">
                                        {cat.label}
                                    </A>
                                </div>
                            }
                        }).collect_view()}
                    </nav>

                    <div class="flex items-center gap-6">
                        <SearchBar />
                        <BadgeLink href=routes::FAVORITES icon="fa-heart" count=favorites_count />
                        <BadgeLink href=routes::CART icon="fa-shopping-cart" count=cart_count />
                    </div>
                </div>
            </div>

            // Full-width dropdown
            {move || open_category.get().map(|key| {
                let sections = catalog.with_value(|tree| tree.sections(&key).map(<[_]>::to_vec)).unwrap_or_default();
                let navigate = navigate.clone();
                view! {
                    <div
                        class="fixed left-0 right-0 bg-white shadow-lg border-t z-40 mega-menu"
                        style="top: 100px;"
                        on:mouseenter=on_panel_enter
                        on:mouseleave=on_panel_leave
                    >
                        <div class="max-w-7xl mx-auto px-4 py-8">
                            <div class="grid grid-cols-2 gap-8">
                                {sections.into_iter().map(|section| {
                                    let navigate = navigate.clone();
                                    view! {
                                        <div>
                                            <h3 class="font-bold text-lg mb-4">{section.label}</h3>
                                            <ul class="space-y-2">
                                                {section.items.into_iter().map(|item| {
                                                    let navigate = navigate.clone();
                                                    let label = item.clone();
                                                    view! {
                                                        <li>
                                                            <button
                                                                class="text-gray-600 hover:text-black text-left transition-colors"
                                                                on:click=move |_| {
                                                                    cancel_dismiss();
                                                                    if let Some(url) = menu.try_update(|m| m.select(&label)).flatten() {
                                                                        log::debug!("[HEADER] Category selected: {}", url);
                                                                        navigate(&url, Default::default());
                                                                    }
                                                                }
                                                            >
                                                                {item}
                                                            </button>
                                                        </li>
                                                    }
                                                }).collect_view()}
                                            </ul>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    </div>
                }
            })}
        </header>
    }
}
