//! Category Catalog
//!
//! Navigation entries and the built-in mega-menu tree.

use crate::models::{CategoryTree, MenuSection, NavCategory};

pub const NAV_CATEGORIES: &[NavCategory] = &[
    NavCategory { label: "Men", key: "men", has_menu: true },
    NavCategory { label: "Women", key: "women", has_menu: true },
    NavCategory { label: "Kids", key: "kids", has_menu: true },
    NavCategory { label: "Sale", key: "sale", has_menu: false },
];

const DEFAULT_TREE: &[(&str, &[(&str, &[&str])])] = &[
    (
        "men",
        &[
            ("Shoes", &["Running Shoes", "Basketball", "Lifestyle", "Training & Gym", "Sandals & Slides"]),
            ("Clothing", &["Tops & T-Shirts", "Hoodies & Sweatshirts", "Jackets", "Pants & Tights", "Shorts"]),
        ],
    ),
    (
        "women",
        &[
            ("Shoes", &["Running Shoes", "Lifestyle", "Training & Gym", "Heels", "Sandals & Slides"]),
            ("Clothing", &["Sports Bras", "Tops & T-Shirts", "Leggings", "Jackets", "Skirts & Dresses"]),
        ],
    ),
    (
        "kids",
        &[
            ("Shoes", &["Big Kids (3.5Y - 7Y)", "Little Kids (10.5C - 3Y)", "Baby & Toddler"]),
            ("Clothing", &["Tops & T-Shirts", "Hoodies", "Pants", "School Uniforms"]),
        ],
    ),
];

/// The mega-menu tree shipped with the app
pub fn default_tree() -> CategoryTree {
    let map = DEFAULT_TREE
        .iter()
        .map(|(key, sections)| {
            let sections = sections
                .iter()
                .map(|(label, items)| MenuSection {
                    label: label.to_string(),
                    items: items.iter().map(|s| s.to_string()).collect(),
                })
                .collect();
            (key.to_string(), sections)
        })
        .collect();
    CategoryTree(map)
}

/// Parse an externally supplied tree
pub fn tree_from_json(raw: &str) -> Result<CategoryTree, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Element id of an optional JSON tree supplied by the host page
pub const CATALOG_ELEMENT_ID: &str = "category-data";

/// Use the host page's tree when present and valid, otherwise the built-in one
pub fn load_tree() -> CategoryTree {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CATALOG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw.as_deref().map(tree_from_json) {
        Some(Ok(tree)) => {
            log::debug!("[CATALOG] Using #{} ({} categories)", CATALOG_ELEMENT_ID, tree.0.len());
            tree
        }
        Some(Err(err)) => {
            log::warn!("[CATALOG] Ignoring invalid #{}: {}", CATALOG_ELEMENT_ID, err);
            default_tree()
        }
        None => default_tree(),
    }
}
