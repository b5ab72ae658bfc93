//! Routed Pages
//!
//! Views mounted by the router below the storefront header.

mod listing;
mod saved;

pub use listing::ListingPage;
pub use saved::{CartPage, FavoritesPage};

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 page-body">
            <section class="home-hero">
                <h1 class="text-4xl font-bold">"Step into the season"</h1>
                <p class="text-gray-600">"New running, training and lifestyle arrivals."</p>
                <A href=routes::category_url("sale") attr:class="cta">"Shop the sale"</A>
            </section>
            <p class="text-sm text-gray-500">
                "Looking for the studio portfolio? "
                <A href=routes::PORTFOLIO>"Visit it here"</A>
            </p>
        </div>
    }
}

/// Simple text page for routes without their own content yet
#[component]
pub fn InfoPage(title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 page-body">
            <h1 class="text-2xl font-bold mb-4">{title}</h1>
            <p>{body}</p>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 page-body">
            <h1 class="text-2xl font-bold mb-4">"Page not found"</h1>
            <A href=routes::HOME>"Back to the store"</A>
        </div>
    }
}
