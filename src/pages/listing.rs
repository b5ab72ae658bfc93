//! Product Listing Page
//!
//! Target of both the search form and the category menu. Products are
//! derived from the category tree until a catalogue backend exists.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::context::use_app_context;
use crate::header::slugify;
use crate::models::CategoryTree;
use crate::store::{
    store_add_to_cart, store_toggle_favorite, use_shop_store, ShopStateStoreFields,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub section: String,
}

/// Query parameters accepted by `/plp`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    pub search: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
}

impl ListingFilter {
    pub fn title(&self) -> String {
        match (&self.search, &self.category, &self.subcategory) {
            (Some(q), _, _) => format!("Results for \"{}\"", q),
            (None, Some(c), Some(s)) => format!("{} / {}", c, s),
            (None, Some(c), None) => c.clone(),
            _ => "All products".to_string(),
        }
    }

    fn accepts(&self, product: &Product) -> bool {
        if let Some(cat) = &self.category {
            if &product.category != cat {
                return false;
            }
        }
        if let Some(sub) = &self.subcategory {
            if &slugify(&product.name) != sub {
                return false;
            }
        }
        if let Some(q) = &self.search {
            let q = q.trim().to_lowercase();
            if !q.is_empty() && !product.name.to_lowercase().contains(&q) {
                return false;
            }
        }
        true
    }
}

/// Every leaf item of the tree as a product, in tree order
pub fn all_products(tree: &CategoryTree) -> Vec<Product> {
    tree.0
        .iter()
        .flat_map(|(category, sections)| {
            sections.iter().flat_map(move |section| {
                section.items.iter().map(move |item| Product {
                    id: format!("{}-{}-{}", category, slugify(&section.label), slugify(item)),
                    name: item.clone(),
                    category: category.clone(),
                    section: section.label.clone(),
                })
            })
        })
        .collect()
}

pub fn filter_products(tree: &CategoryTree, filter: &ListingFilter) -> Vec<Product> {
    all_products(tree)
        .into_iter()
        .filter(|p| filter.accepts(p))
        .collect()
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_shop_store();
    let id = StoredValue::new(product.id.clone());

    let is_favorite = move || id.with_value(|id| store.favorites().read().contains(id));

    view! {
        <div class="product-card">
            <span class="product-section">{product.section}</span>
            <h3>{product.name}</h3>
            <div class="product-actions">
                <button
                    class=move || if is_favorite() { "fav-btn active" } else { "fav-btn" }
                    on:click=move |_| {
                        id.with_value(|id| ctx.with_config(|c| store_toggle_favorite(&store, c, id)));
                    }
                >
                    <i class="fas fa-heart"></i>
                </button>
                <button
                    class="cart-btn"
                    on:click=move |_| {
                        id.with_value(|id| ctx.with_config(|c| store_add_to_cart(&store, c, id)));
                    }
                >
                    "Add to cart"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn ListingPage() -> impl IntoView {
    let ctx = use_app_context();
    let query = use_query_map();

    let filter = Memo::new(move |_| {
        query.with(|q| ListingFilter {
            search: q.get("search").map(|s| s.to_string()),
            category: q.get("category").map(|s| s.to_string()),
            subcategory: q.get("subcategory").map(|s| s.to_string()),
        })
    });

    let products = move || ctx.catalog().with_value(|tree| filter.with(|f| filter_products(tree, f)));

    view! {
        <div class="container mx-auto px-4 page-body">
            <h1 class="text-2xl font-bold mb-6">{move || filter.with(ListingFilter::title)}</h1>
            {move || {
                let items = products();
                if items.is_empty() {
                    view! { <p class="empty-state">"No products match."</p> }.into_any()
                } else {
                    view! {
                        <div class="product-grid">
                            <For
                                each=move || items.clone()
                                key=|p| p.id.clone()
                                children=move |product| view! { <ProductCard product=product /> }
                            />
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
