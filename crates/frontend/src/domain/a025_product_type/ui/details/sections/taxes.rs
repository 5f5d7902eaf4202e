//! Taxes section - tax category of the product type

use super::super::view_model::ProductTypeDetailsVm;
use contracts::domain::a025_product_type::TaxRateType;
use leptos::prelude::*;

#[component]
pub fn TaxesSection(vm: ProductTypeDetailsVm, #[prop(into)] disabled: Signal<bool>) -> impl IntoView {
    let tax_rate = Signal::derive(move || vm.form.with(|f| f.data().tax_rate));

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Налоги"</h4>
            <div class="form__group">
                <label class="form__label" for="product-type-tax-rate">"Налоговая категория"</label>
                <select
                    id="product-type-tax-rate"
                    name="taxRate"
                    class="form__select"
                    disabled=move || disabled.get()
                    on:change=move |ev| {
                        vm.set_tax_rate(TaxRateType::from_code(&event_target_value(&ev)))
                    }
                >
                    <option value="" prop:selected=move || tax_rate.get().is_none()>
                        "Не указана"
                    </option>
                    {TaxRateType::all()
                        .into_iter()
                        .map(|rate| view! {
                            <option
                                value=rate.code()
                                prop:selected=move || tax_rate.get() == Some(rate)
                            >
                                {rate.display_name()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}
