//! Route Paths
//!
//! URL builders for the product listing page.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub const HOME: &str = "/";
pub const LISTING: &str = "/plp";
pub const FAVORITES: &str = "/favorites";
pub const CART: &str = "/cart";
pub const PORTFOLIO: &str = "/portfolio";

/// Characters `encodeURIComponent` leaves alone
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// `/plp?search=...` for a free-text query
pub fn search_url(query: &str) -> String {
    format!("{}?search={}", LISTING, encode_component(query))
}

/// `/plp?category=...` for a top-level nav entry
pub fn category_url(category: &str) -> String {
    format!("{}?category={}", LISTING, encode_component(category))
}

/// `/plp?category=...&subcategory=...`; `slug` must already be normalized
pub fn subcategory_url(category: &str, slug: &str) -> String {
    format!(
        "{}?category={}&subcategory={}",
        LISTING,
        encode_component(category),
        encode_component(slug)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_escapes_like_encode_uri_component() {
        assert_eq!(search_url("red shoes & socks"), "/plp?search=red%20shoes%20%26%20socks");
        assert_eq!(search_url("it's (new)!"), "/plp?search=it's%20(new)!");
        assert_eq!(search_url("été"), "/plp?search=%C3%A9t%C3%A9");
    }

    #[test]
    fn test_subcategory_url() {
        assert_eq!(
            subcategory_url("men", "running-shoes"),
            "/plp?category=men&subcategory=running-shoes"
        );
        assert_eq!(category_url("sale"), "/plp?category=sale");
    }
}
