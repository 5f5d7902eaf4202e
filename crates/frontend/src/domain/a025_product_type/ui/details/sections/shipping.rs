//! Shipping section - shipping flag and weight

use super::super::view_model::{format_weight, parse_weight, ProductTypeDetailsVm};
use crate::shared::components::ui::ControlledCheckbox;
use contracts::domain::a025_product_type::WeightUnit;
use leptos::prelude::*;

#[component]
pub fn ShippingSection(
    vm: ProductTypeDetailsVm,
    #[prop(into)] disabled: Signal<bool>,
    default_weight_unit: WeightUnit,
) -> impl IntoView {
    let is_shipping_required =
        Signal::derive(move || vm.form.with(|f| f.data().is_shipping_required));

    // Raw input text; the form keeps only the parsed number
    let weight_text = RwSignal::new(format_weight(vm.form.with_untracked(|f| f.data().weight)));
    Effect::new(move |_| {
        vm.loads.track();
        let weight = vm.form.with_untracked(|f| f.data().weight);
        if parse_weight(&weight_text.get_untracked()) != weight {
            weight_text.set(format_weight(weight));
        }
    });

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Доставка"</h4>
            <ControlledCheckbox
                label="Требуется доставка"
                name="isShippingRequired"
                checked=is_shipping_required
                disabled=disabled
                on_change=Callback::new(move |value| vm.set_is_shipping_required(value))
            />
            <Show when=move || is_shipping_required.get()>
                <div class="form__group">
                    <label class="form__label" for="product-type-weight">"Вес"</label>
                    <div class="form__input-group">
                        <input
                            type="text"
                            inputmode="decimal"
                            id="product-type-weight"
                            name="weight"
                            class="form__input"
                            prop:value=move || weight_text.get()
                            disabled=move || disabled.get()
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                vm.set_weight(parse_weight(&text));
                                weight_text.set(text);
                            }
                        />
                        <span class="form__input-suffix">{default_weight_unit.symbol()}</span>
                    </div>
                </div>
            </Show>
        </div>
    }
}
