//! Main page component for Product Type details
//!
//! Thin wrapper that:
//! - Creates ViewModel and re-derives it when new data arrives
//! - Renders header, two-column grid of sections and the save bar
//! - Forwards user actions to the callbacks of the page owner

use super::sections::{AttributesSection, GeneralSection, ShippingSection, TaxesSection};
use super::view_model::ProductTypeDetailsVm;
use crate::shared::components::ui::ControlledCheckbox;
use crate::shared::components::{AppHeader, ConfirmButtonTransitionState, PageHeader, SaveButtonBar};
use crate::shared::list_actions::ListActions;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::shared::state::{confirm_leave, non_field_errors};
use contracts::domain::a025_product_type::{
    AttributeDetails, AttributeType, ProductTypeDetails, ProductTypeForm, ReorderEvent, WeightUnit,
};
use contracts::shared::UserError;
use leptos::prelude::*;

#[component]
pub fn ProductTypeDetailsPage(
    /// Validation errors of the last submit
    #[prop(into)]
    errors: Signal<Vec<UserError>>,
    /// `None` while loading; single fields may be missing as well
    #[prop(into)]
    product_type: Signal<Option<ProductTypeDetails>>,
    default_weight_unit: WeightUnit,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] page_title: Signal<String>,
    product_attribute_list: ListActions,
    variant_attribute_list: ListActions,
    #[prop(into)] save_button_bar_state: Signal<ConfirmButtonTransitionState>,
    on_attribute_add: Callback<AttributeType>,
    on_attribute_click: Callback<String>,
    on_attribute_reorder: Callback<(ReorderEvent, AttributeType)>,
    on_attribute_unassign: Callback<String>,
    on_back: Callback<()>,
    on_delete: Callback<()>,
    on_submit: Callback<ProductTypeForm>,
) -> impl IntoView {
    let vm = product_type.with_untracked(|pt| ProductTypeDetailsVm::new(pt.as_ref()));

    // New data from the owner: changed loaded values win, other edits stay
    Effect::new(move |prev: Option<()>| {
        product_type.with(|pt| {
            if prev.is_some() {
                vm.reload(pt.as_ref());
            }
        });
    });

    let has_variants = vm.has_variants();
    let has_changed = vm.has_changed();
    let save_disabled = vm.is_save_disabled(disabled);

    let product_attributes = Signal::derive(move || {
        product_type.with(|pt| attributes_of(pt.as_ref(), AttributeType::Product))
    });
    let variant_attributes = Signal::derive(move || {
        product_type.with(|pt| attributes_of(pt.as_ref(), AttributeType::Variant))
    });
    let general_errors = Signal::derive(move || errors.with(|e| non_field_errors(e)));

    let handle_back = Callback::new(move |_: ()| {
        if confirm_leave(has_changed.get_untracked()) {
            on_back.run(());
        }
    });
    let handle_save = Callback::new(move |_: ()| {
        if !save_disabled.get_untracked() {
            vm.submit(on_submit);
        }
    });

    view! {
        <PageFrame page_id="a025_product_type--detail" category=PAGE_CAT_DETAIL>
            <form
                class="details-container product-type-details"
                on:submit=move |ev| {
                    ev.prevent_default();
                    handle_save.run(());
                }
            >
                <AppHeader on_back=handle_back>"Типы товаров"</AppHeader>
                <PageHeader title=page_title />

                {move || {
                    let messages = general_errors.get();
                    (!messages.is_empty()).then(|| view! {
                        <div class="warning-box warning-box--error">
                            {messages
                                .into_iter()
                                .map(|m| view! { <div class="warning-box__text">{m}</div> })
                                .collect_view()}
                        </div>
                    })
                }}

                <div class="details-grid details-grid--sidebar">
                    <div class="details-grid__main">
                        <GeneralSection vm=vm disabled=disabled errors=errors />
                        <div class="card-spacer" />
                        <AttributesSection
                            attributes=product_attributes
                            disabled=disabled
                            attribute_type=AttributeType::Product
                            list=product_attribute_list
                            on_attribute_assign=on_attribute_add
                            on_attribute_click=on_attribute_click
                            on_attribute_reorder=Callback::new(move |event: ReorderEvent| {
                                on_attribute_reorder.run((event, AttributeType::Product))
                            })
                            on_attribute_unassign=on_attribute_unassign
                        />
                        <div class="card-spacer" />
                        <ControlledCheckbox
                            label="У этого типа товара есть варианты"
                            name="hasVariants"
                            checked=has_variants
                            disabled=disabled
                            on_change=Callback::new(move |value| vm.set_has_variants(value))
                        />
                        <Show when=move || has_variants.get()>
                            <div class="card-spacer" />
                            <AttributesSection
                                attributes=variant_attributes
                                disabled=disabled
                                attribute_type=AttributeType::Variant
                                list=variant_attribute_list.clone()
                                on_attribute_assign=on_attribute_add
                                on_attribute_click=on_attribute_click
                                on_attribute_reorder=Callback::new(move |event: ReorderEvent| {
                                    on_attribute_reorder.run((event, AttributeType::Variant))
                                })
                                on_attribute_unassign=on_attribute_unassign
                            />
                        </Show>
                    </div>
                    <div class="details-grid__side">
                        <ShippingSection
                            vm=vm
                            disabled=disabled
                            default_weight_unit=default_weight_unit
                        />
                        <div class="card-spacer" />
                        <TaxesSection vm=vm disabled=disabled />
                    </div>
                </div>

                <SaveButtonBar
                    state=save_button_bar_state
                    disabled=save_disabled
                    on_cancel=handle_back
                    on_save=handle_save
                    on_delete=on_delete
                />
            </form>
        </PageFrame>
    }
}

/// Attribute list of `kind`, `None` until it is loaded
pub fn attributes_of(
    product_type: Option<&ProductTypeDetails>,
    kind: AttributeType,
) -> Option<Vec<AttributeDetails>> {
    product_type.and_then(|pt| pt.attributes(kind).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_of_missing_product_type() {
        assert_eq!(attributes_of(None, AttributeType::Product), None);
        assert_eq!(
            attributes_of(Some(&ProductTypeDetails::default()), AttributeType::Variant),
            None
        );
    }

    #[test]
    fn test_attributes_of_picks_kind() {
        let pt = ProductTypeDetails::from_json(
            r#"{
                "productAttributes": [{ "id": "1", "name": "Color" }],
                "variantAttributes": [{ "id": "2", "name": "Size" }]
            }"#,
        )
        .unwrap();

        let variant = attributes_of(pt.as_ref(), AttributeType::Variant).unwrap();
        assert_eq!(variant.len(), 1);
        assert_eq!(variant[0].name, "Size");
    }
}
