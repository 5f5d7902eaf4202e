use super::enums::{AttributeType, TaxRateType, WeightUnit};
use super::events::ReorderEvent;
use anyhow::Context;
use serde::{Deserialize, Serialize};

// ============================================================================
// Attribute
// ============================================================================

/// Attribute assigned to a product type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDetails {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub visible_in_storefront: Option<bool>,

    #[serde(default)]
    pub filterable_in_dashboard: Option<bool>,

    #[serde(default)]
    pub filterable_in_storefront: Option<bool>,
}

// ============================================================================
// Weight
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductTypeWeight {
    #[serde(default)]
    pub unit: Option<WeightUnit>,

    #[serde(default)]
    pub value: Option<f64>,
}

// ============================================================================
// Product type (as delivered by the API, any field may still be loading)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductTypeDetails {
    pub id: Option<String>,
    pub name: Option<String>,
    pub has_variants: Option<bool>,
    pub is_shipping_required: Option<bool>,
    pub tax_rate: Option<TaxRateType>,
    pub product_attributes: Option<Vec<AttributeDetails>>,
    pub variant_attributes: Option<Vec<AttributeDetails>>,
    pub weight: Option<ProductTypeWeight>,
}

impl ProductTypeDetails {
    /// Parse an API payload. `null` means the product type is not loaded yet.
    pub fn from_json(json: &str) -> anyhow::Result<Option<Self>> {
        serde_json::from_str::<Option<Self>>(json).context("Invalid product type payload")
    }

    /// Weight magnitude, if every level of the nested path is present
    pub fn weight_value(&self) -> Option<f64> {
        self.weight.and_then(|w| w.value)
    }

    pub fn attributes(&self, kind: AttributeType) -> Option<&Vec<AttributeDetails>> {
        match kind {
            AttributeType::Product => self.product_attributes.as_ref(),
            AttributeType::Variant => self.variant_attributes.as_ref(),
        }
    }

    /// Move an attribute inside the list of the given kind.
    ///
    /// Returns `false` when the list is not loaded or the event is out of range.
    pub fn reorder_attributes(&mut self, kind: AttributeType, event: ReorderEvent) -> bool {
        let list = match kind {
            AttributeType::Product => self.product_attributes.as_mut(),
            AttributeType::Variant => self.variant_attributes.as_mut(),
        };
        list.map_or(false, |items| event.apply(items))
    }

    /// Remove an attribute from whichever list holds it
    pub fn unassign_attribute(&mut self, attribute_id: &str) -> bool {
        let mut removed = false;
        for list in [&mut self.product_attributes, &mut self.variant_attributes]
            .into_iter()
            .flatten()
        {
            let before = list.len();
            list.retain(|a| a.id != attribute_id);
            removed |= list.len() != before;
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn attribute(id: &str, name: &str) -> AttributeDetails {
        AttributeDetails {
            id: id.to_string(),
            name: name.to_string(),
            slug: None,
            visible_in_storefront: None,
            filterable_in_dashboard: None,
            filterable_in_storefront: None,
        }
    }

    #[test]
    fn test_from_json_null_is_not_loaded() {
        assert_eq!(ProductTypeDetails::from_json("null").unwrap(), None);
    }

    #[test]
    fn test_from_json_partial_payload() {
        let payload = json!({
            "__typename": "ProductType",
            "id": "UHJvZHVjdFR5cGU6MQ==",
            "name": "Shirt",
            "taxRate": "STANDARD",
            "productAttributes": [
                { "id": "1", "name": "Color", "slug": "color", "visibleInStorefront": true }
            ],
            "weight": { "unit": "KG", "value": null }
        });
        let pt = ProductTypeDetails::from_json(&payload.to_string())
            .unwrap()
            .unwrap();

        assert_eq!(pt.name.as_deref(), Some("Shirt"));
        assert_eq!(pt.has_variants, None);
        assert_eq!(pt.tax_rate, Some(TaxRateType::Standard));
        assert_eq!(pt.variant_attributes, None);
        assert_eq!(pt.weight_value(), None);

        let attrs = pt.product_attributes.unwrap();
        assert_eq!(attrs[0].slug.as_deref(), Some("color"));
        assert_eq!(attrs[0].visible_in_storefront, Some(true));
        assert_eq!(attrs[0].filterable_in_dashboard, None);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = ProductTypeDetails::from_json("{\"name\": 42}").unwrap_err();
        assert!(err.to_string().contains("Invalid product type payload"));
    }

    #[test]
    fn test_weight_value_chain() {
        let mut pt = ProductTypeDetails::default();
        assert_eq!(pt.weight_value(), None);

        pt.weight = Some(ProductTypeWeight::default());
        assert_eq!(pt.weight_value(), None);

        pt.weight = Some(ProductTypeWeight {
            unit: Some(WeightUnit::Kg),
            value: Some(2.5),
        });
        assert_eq!(pt.weight_value(), Some(2.5));
    }

    #[test]
    fn test_reorder_attributes() {
        let mut pt = ProductTypeDetails {
            product_attributes: Some(vec![
                attribute("1", "Color"),
                attribute("2", "Size"),
                attribute("3", "Material"),
            ]),
            ..Default::default()
        };

        assert!(pt.reorder_attributes(AttributeType::Product, ReorderEvent::new(0, 2)));
        let ids: Vec<_> = pt
            .attributes(AttributeType::Product)
            .unwrap()
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "3", "1"]);

        // Variant list is not loaded
        assert!(!pt.reorder_attributes(AttributeType::Variant, ReorderEvent::new(0, 1)));
    }

    #[test]
    fn test_unassign_attribute() {
        let mut pt = ProductTypeDetails {
            product_attributes: Some(vec![attribute("1", "Color")]),
            variant_attributes: Some(vec![attribute("2", "Size")]),
            ..Default::default()
        };

        assert!(pt.unassign_attribute("2"));
        assert_eq!(pt.variant_attributes, Some(vec![]));
        assert!(!pt.unassign_attribute("missing"));
        assert_eq!(pt.product_attributes.as_ref().map(Vec::len), Some(1));
    }
}
