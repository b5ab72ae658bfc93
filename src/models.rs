//! Frontend Models
//!
//! Data structures for the category menu and portfolio records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One column of the mega-menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    pub label: String,
    pub items: Vec<String>,
}

/// Category key (e.g. `men`) -> ordered sections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTree(pub BTreeMap<String, Vec<MenuSection>>);

impl CategoryTree {
    pub fn sections(&self, key: &str) -> Option<&[MenuSection]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }
}

/// Top-level navigation entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavCategory {
    pub label: &'static str,
    pub key: &'static str,
    /// `false` for entries that link directly without a dropdown
    pub has_menu: bool,
}

/// Static project detail shown in the slide-in panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub status: String,
    pub description: String,
}
