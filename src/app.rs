//! Storefront App
//!
//! Root component: shared context, the shop store, and the router.

use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::catalog;
use crate::config::UiConfig;
use crate::context::AppContext;
use crate::header::Header;
use crate::pages::{CartPage, FavoritesPage, HomePage, InfoPage, ListingPage, NotFound};
use crate::portfolio::PortfolioPage;
use crate::store::ShopState;

#[component]
pub fn App() -> impl IntoView {
    let config = UiConfig::load();
    let shop = Store::new(ShopState::load(&config));

    // Provide context to all children
    provide_context(AppContext::new(config, catalog::load_tree()));
    provide_context(shop);

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/portfolio") view=PortfolioPage />
                <ParentRoute path=path!("") view=StoreLayout>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("plp") view=ListingPage />
                    <Route path=path!("favorites") view=FavoritesPage />
                    <Route path=path!("cart") view=CartPage />
                    <Route path=path!("help") view=|| view! {
                        <InfoPage title="Help" body="Orders, returns and delivery questions: support@tandashoes.example" />
                    } />
                    <Route path=path!("join") view=|| view! {
                        <InfoPage title="Join Us" body="Membership sign-up opens soon." />
                    } />
                    <Route path=path!("auth") view=|| view! {
                        <InfoPage title="Sign In" body="Accounts are not available yet." />
                    } />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Storefront pages share the header; the portfolio page stands alone
#[component]
fn StoreLayout() -> impl IntoView {
    view! {
        <Header />
        <main class="pt-28">
            <Outlet />
        </main>
    }
}
