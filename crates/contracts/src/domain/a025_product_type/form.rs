//! Editable form shape of the product type details page and its derivation
//! from a possibly incomplete [`ProductTypeDetails`].

use super::aggregate::{AttributeDetails, ProductTypeDetails};
use super::enums::TaxRateType;
use serde::{Deserialize, Serialize};

/// Label/value pair used by choice inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceType {
    pub label: String,
    pub value: String,
}

impl From<&AttributeDetails> for ChoiceType {
    fn from(attribute: &AttributeDetails) -> Self {
        Self {
            label: attribute.name.clone(),
            value: attribute.id.clone(),
        }
    }
}

/// Form data submitted by the product type details page
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTypeForm {
    pub name: String,
    pub has_variants: bool,
    pub is_shipping_required: bool,
    /// Stays `None` when unknown, unlike the other scalar fields.
    pub tax_rate: Option<TaxRateType>,
    pub product_attributes: Vec<ChoiceType>,
    pub variant_attributes: Vec<ChoiceType>,
    /// Blank input when `None`
    pub weight: Option<f64>,
}

impl ProductTypeForm {
    /// Build initial form values. Every missing piece of `source` falls back
    /// to a fixed default; nothing here fails.
    pub fn from_source(source: Option<&ProductTypeDetails>) -> Self {
        Self {
            name: source.and_then(|pt| pt.name.clone()).unwrap_or_default(),
            has_variants: source.and_then(|pt| pt.has_variants).unwrap_or(false),
            is_shipping_required: source
                .and_then(|pt| pt.is_shipping_required)
                .unwrap_or(false),
            tax_rate: source.and_then(|pt| pt.tax_rate),
            product_attributes: choices(source.and_then(|pt| pt.product_attributes.as_deref())),
            variant_attributes: choices(source.and_then(|pt| pt.variant_attributes.as_deref())),
            weight: source.and_then(ProductTypeDetails::weight_value),
        }
    }

    /// Take over every field whose loaded value moved from `old` to `new`.
    /// Fields with an unchanged loaded value keep what the user typed.
    pub fn rebase(&mut self, old: &Self, new: &Self) {
        take_changed(&mut self.name, &old.name, &new.name);
        take_changed(&mut self.has_variants, &old.has_variants, &new.has_variants);
        take_changed(
            &mut self.is_shipping_required,
            &old.is_shipping_required,
            &new.is_shipping_required,
        );
        take_changed(&mut self.tax_rate, &old.tax_rate, &new.tax_rate);
        take_changed(
            &mut self.product_attributes,
            &old.product_attributes,
            &new.product_attributes,
        );
        take_changed(
            &mut self.variant_attributes,
            &old.variant_attributes,
            &new.variant_attributes,
        );
        take_changed(&mut self.weight, &old.weight, &new.weight);
    }
}

fn take_changed<T: Clone + PartialEq>(field: &mut T, old: &T, new: &T) {
    if old != new {
        *field = new.clone();
    }
}

fn choices(attributes: Option<&[AttributeDetails]>) -> Vec<ChoiceType> {
    attributes
        .map(|list| list.iter().map(ChoiceType::from).collect())
        .unwrap_or_default()
}
