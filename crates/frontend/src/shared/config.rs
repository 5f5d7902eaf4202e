//! Page configuration supplied by the embedding admin page.
//!
//! The host renders a `<script id="product-type-config" type="application/json">`
//! element next to the mount point. Missing or broken config falls back to the
//! embedded default.

use contracts::domain::a025_product_type::WeightUnit;
use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "product-type-config";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
{
    "pageTitle": "Тип товара",
    "defaultWeightUnit": "KG",
    "disabled": false
}
"#;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    pub page_title: String,
    pub default_weight_unit: WeightUnit,
    /// Render the form read-only
    pub disabled: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_title: "Тип товара".to_string(),
            default_weight_unit: WeightUnit::Kg,
            disabled: false,
        }
    }
}

pub fn parse_config(json: &str) -> Result<PageConfig, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid page config: {}", e))
}

/// Read the config element from the current document
pub fn load_config() -> PageConfig {
    match read_json_element(CONFIG_ELEMENT_ID) {
        Some(text) => parse_config(&text).unwrap_or_else(|e| {
            log::error!("{}", e);
            default_config()
        }),
        None => {
            log::warn!("#{} not found, using default config", CONFIG_ELEMENT_ID);
            default_config()
        }
    }
}

fn default_config() -> PageConfig {
    parse_config(DEFAULT_CONFIG).unwrap_or_default()
}

/// Text content of a JSON `<script>` element, if present
pub fn read_json_element(id: &str) -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .text_content()
        .filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        assert_eq!(config.unwrap(), PageConfig::default());
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = parse_config(r#"{ "defaultWeightUnit": "LB" }"#).unwrap();
        assert_eq!(config.default_weight_unit, WeightUnit::Lb);
        assert_eq!(config.page_title, "Тип товара");
        assert!(!config.disabled);
    }

    #[test]
    fn test_invalid_config() {
        let err = parse_config(r#"{ "defaultWeightUnit": "TON" }"#).unwrap_err();
        assert!(err.starts_with("Invalid page config"));
    }
}
