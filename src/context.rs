//! Application Context
//!
//! Shared read-only values provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::UiConfig;
use crate::models::CategoryTree;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// UI tunables and storage keys
    config: StoredValue<UiConfig>,
    /// Mega-menu data
    catalog: StoredValue<CategoryTree>,
}

impl AppContext {
    pub fn new(config: UiConfig, catalog: CategoryTree) -> Self {
        Self {
            config: StoredValue::new(config),
            catalog: StoredValue::new(catalog),
        }
    }

    pub fn config(&self) -> UiConfig {
        self.config.get_value()
    }

    /// Run `f` against the config without cloning it
    pub fn with_config<T>(&self, f: impl FnOnce(&UiConfig) -> T) -> T {
        self.config.with_value(f)
    }

    pub fn catalog(&self) -> StoredValue<CategoryTree> {
        self.catalog
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
