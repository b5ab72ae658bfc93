//! UI Configuration
//!
//! Tunables shared by the header and portfolio components.
//! Defaults match the storefront's behaviour; a host page can override
//! any subset with a JSON block:
//!
//! ```html
//! <script id="ui-config" type="application/json">{ "dismiss_delay_ms": 300 }</script>
//! ```

use serde::Deserialize;

/// Element id of the optional JSON override block
pub const CONFIG_ELEMENT_ID: &str = "ui-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Header stays pinned while scroll offset is below this many pixels
    pub pin_band_px: f64,
    /// Delay before the mega-menu closes after leaving a category
    pub dismiss_delay_ms: u32,
    /// Delay between revealing the detail panel and activating it
    pub panel_open_delay_ms: u32,
    pub favorites_key: String,
    pub cart_key: String,
    /// Same-tab notification fired by external favorites mutators
    pub favorites_event: String,
    /// Same-tab notification fired by external cart mutators
    pub cart_event: String,
    pub spy_root_margin: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            pin_band_px: 10.0,
            dismiss_delay_ms: 200,
            panel_open_delay_ms: 10,
            favorites_key: "favorites".to_string(),
            cart_key: "cart".to_string(),
            favorites_event: "favoritesUpdated".to_string(),
            cart_event: "cartUpdated".to_string(),
            spy_root_margin: "-50% 0px -50% 0px".to_string(),
        }
    }
}

impl UiConfig {
    /// Parse an override block; unknown fields are ignored, missing ones default
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Read the override block from the document, falling back to defaults
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => {
                    log::debug!("[CONFIG] Loaded overrides from #{}", CONFIG_ELEMENT_ID);
                    config
                }
                Err(err) => {
                    log::warn!("[CONFIG] Ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, err);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = UiConfig::from_json(r#"{ "dismiss_delay_ms": 350, "cart_key": "bag" }"#).unwrap();
        assert_eq!(config.dismiss_delay_ms, 350);
        assert_eq!(config.cart_key, "bag");
        assert_eq!(config.favorites_key, "favorites");
        assert_eq!(config.pin_band_px, 10.0);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(UiConfig::from_json("{}").unwrap(), UiConfig::default());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(UiConfig::from_json("{ dismiss").is_err());
    }
}
