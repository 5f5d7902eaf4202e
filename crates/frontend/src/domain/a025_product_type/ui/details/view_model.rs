//! ViewModel for the Product Type details form
//!
//! Holds the form state in a single signal; sections read derived signals
//! and write through the `set_*` commands.

use crate::shared::state::FormState;
use contracts::domain::a025_product_type::{ProductTypeDetails, ProductTypeForm, TaxRateType};
use leptos::prelude::*;

/// Parse the weight input. Blank or non-numeric input leaves the weight empty.
pub fn parse_weight(input: &str) -> Option<f64> {
    let normalized = input.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn format_weight(weight: Option<f64>) -> String {
    weight.map(|w| w.to_string()).unwrap_or_default()
}

#[derive(Clone, Copy)]
pub struct ProductTypeDetailsVm {
    pub form: RwSignal<FormState<ProductTypeForm>>,
    /// Incremented on every external data load
    pub loads: RwSignal<usize>,
}

impl ProductTypeDetailsVm {
    pub fn new(source: Option<&ProductTypeDetails>) -> Self {
        Self {
            form: RwSignal::new(FormState::new(ProductTypeForm::from_source(source))),
            loads: RwSignal::new(0),
        }
    }

    /// Re-derive the form after the product type changed.
    ///
    /// Only fields whose derived value differs from the previous load are
    /// replaced; other in-progress edits stay.
    pub fn reload(&self, source: Option<&ProductTypeDetails>) {
        log::debug!(
            "product type form reload: {}",
            source.and_then(|pt| pt.id.as_deref()).unwrap_or("<not loaded>")
        );
        let initial = ProductTypeForm::from_source(source);
        self.form.update(|f| f.rebase(initial, ProductTypeForm::rebase));
        self.loads.update(|n| *n += 1);
    }

    // === Derived signals ===

    /// Live value of the "has variants" checkbox
    pub fn has_variants(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.data().has_variants))
    }

    pub fn has_changed(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.has_changed()))
    }

    pub fn is_save_disabled(&self, disabled: Signal<bool>) -> Signal<bool> {
        let has_changed = self.has_changed();
        Signal::derive(move || disabled.get() || !has_changed.get())
    }

    // === Commands ===

    fn change(&self, edit: impl FnOnce(&mut ProductTypeForm)) {
        self.form.update(|f| f.change(edit));
    }

    pub fn set_name(&self, name: String) {
        self.change(|f| f.name = name);
    }

    pub fn set_has_variants(&self, value: bool) {
        self.change(|f| f.has_variants = value);
    }

    pub fn set_is_shipping_required(&self, value: bool) {
        self.change(|f| f.is_shipping_required = value);
    }

    pub fn set_tax_rate(&self, tax_rate: Option<TaxRateType>) {
        self.change(|f| f.tax_rate = tax_rate);
    }

    pub fn set_weight(&self, weight: Option<f64>) {
        self.change(|f| f.weight = weight);
    }

    /// Hand the complete form data to the page owner
    pub fn submit(&self, on_submit: Callback<ProductTypeForm>) {
        let data = self.form.with_untracked(|f| f.data().clone());
        log::info!("product type submit: {:?}", data.name);
        on_submit.run(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a025_product_type::{AttributeDetails, AttributeType, ReorderEvent};
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    fn data(vm: &ProductTypeDetailsVm) -> ProductTypeForm {
        vm.form.with_untracked(|f| f.data().clone())
    }

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

    fn shirt() -> ProductTypeDetails {
        ProductTypeDetails {
            id: Some("pt-1".to_string()),
            name: Some("Shirt".to_string()),
            has_variants: Some(false),
            product_attributes: Some(vec![AttributeDetails {
                id: "1".to_string(),
                name: "Color".to_string(),
                slug: Some("color".to_string()),
                visible_in_storefront: None,
                filterable_in_dashboard: None,
                filterable_in_storefront: None,
            }]),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight(""), None);
        assert_eq!(parse_weight("   "), None);
        assert_eq!(parse_weight("2.5"), Some(2.5));
        assert_eq!(parse_weight(" 0,75 "), Some(0.75));
        assert_eq!(parse_weight("abc"), None);
        assert_eq!(parse_weight("inf"), None);
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(None), "");
        assert_eq!(format_weight(Some(2.5)), "2.5");
    }

    #[test]
    fn test_new_derives_initial_values() {
        let vm = ProductTypeDetailsVm::new(Some(&shirt()));
        let data = data(&vm);
        assert_eq!(data.name, "Shirt");
        assert_eq!(data.product_attributes.len(), 1);
        assert!(!vm.has_changed().get_untracked());
    }

    #[test]
    fn test_has_variants_follows_live_edits() {
        let vm = ProductTypeDetailsVm::new(Some(&shirt()));
        let has_variants = vm.has_variants();
        assert!(!has_variants.get_untracked());

        vm.set_has_variants(true);
        assert!(has_variants.get_untracked());

        vm.set_has_variants(false);
        assert!(!has_variants.get_untracked());
    }

    #[test]
    fn test_save_disabled() {
        let vm = ProductTypeDetailsVm::new(Some(&shirt()));
        let disabled = RwSignal::new(false);
        let save_disabled = vm.is_save_disabled(disabled.into());

        // nothing changed yet
        assert!(save_disabled.get_untracked());

        vm.set_name("Shirts".to_string());
        assert!(!save_disabled.get_untracked());

        disabled.set(true);
        assert!(save_disabled.get_untracked());
    }

    #[test]
    fn test_first_load_fills_untouched_form() {
        let vm = ProductTypeDetailsVm::new(None);
        vm.reload(Some(&shirt()));
        assert!(!vm.has_changed().get_untracked());
        assert_eq!(data(&vm), ProductTypeForm::from_source(Some(&shirt())));
        assert_eq!(vm.loads.get_untracked(), 1);
    }

    #[test]
    fn test_local_reorder_keeps_edits() {
        let mut pt = shirt();
        pt.product_attributes
            .as_mut()
            .unwrap()
            .push(attribute("2", "Size"));
        let vm = ProductTypeDetailsVm::new(Some(&pt));

        vm.set_name("Shirt v2".to_string());
        vm.set_has_variants(true);

        assert!(pt.reorder_attributes(AttributeType::Product, ReorderEvent::new(0, 1)));
        vm.reload(Some(&pt));

        let data = data(&vm);
        assert_eq!(data.name, "Shirt v2");
        assert!(data.has_variants);
        let order: Vec<_> = data.product_attributes.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(order, vec!["2", "1"]);
        assert!(vm.has_changed().get_untracked());
    }

    #[test]
    fn test_local_unassign_keeps_edits() {
        let mut pt = shirt();
        let vm = ProductTypeDetailsVm::new(Some(&pt));
        vm.set_is_shipping_required(true);
        vm.set_weight(Some(0.4));

        assert!(pt.unassign_attribute("1"));
        vm.reload(Some(&pt));

        let data = data(&vm);
        assert!(data.is_shipping_required);
        assert_eq!(data.weight, Some(0.4));
        assert!(data.product_attributes.is_empty());
    }

    #[test]
    fn test_load_after_save_settles_form() {
        let vm = ProductTypeDetailsVm::new(Some(&shirt()));
        vm.set_name("Shirts".to_string());

        let saved = ProductTypeDetails {
            name: Some("Shirts".to_string()),
            ..shirt()
        };
        vm.reload(Some(&saved));
        assert_eq!(data(&vm).name, "Shirts");
        assert!(!vm.has_changed().get_untracked());
    }

    #[test]
    fn test_external_change_overrides_edit_of_same_field() {
        let vm = ProductTypeDetailsVm::new(Some(&shirt()));
        vm.set_name("Mine".to_string());

        let renamed = ProductTypeDetails {
            name: Some("Theirs".to_string()),
            ..shirt()
        };
        vm.reload(Some(&renamed));
        assert_eq!(data(&vm).name, "Theirs");
    }

    #[test]
    fn test_submit_passes_full_form() {
        let vm = ProductTypeDetailsVm::new(Some(&shirt()));
        vm.set_is_shipping_required(true);
        vm.set_tax_rate(Some(TaxRateType::Standard));

        let submitted = Arc::new(Mutex::new(None));
        let sink = submitted.clone();
        vm.submit(Callback::new(move |data: ProductTypeForm| {
            *sink.lock().unwrap() = Some(data);
        }));

        let data = submitted.lock().unwrap().clone().unwrap();
        assert_eq!(
            data,
            ProductTypeForm {
                name: "Shirt".to_string(),
                has_variants: false,
                is_shipping_required: true,
                tax_rate: Some(TaxRateType::Standard),
                product_attributes: ProductTypeForm::from_source(Some(&shirt())).product_attributes,
                variant_attributes: vec![],
                weight: None,
            }
        );
    }
}
