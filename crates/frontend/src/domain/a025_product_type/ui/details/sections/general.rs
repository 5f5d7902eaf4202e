//! General section - product type name

use super::super::view_model::ProductTypeDetailsVm;
use crate::shared::state::field_error;
use contracts::shared::UserError;
use leptos::prelude::*;

#[component]
pub fn GeneralSection(
    vm: ProductTypeDetailsVm,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] errors: Signal<Vec<UserError>>,
) -> impl IntoView {
    let name_error =
        Signal::derive(move || errors.with(|e| field_error(e, "name").map(str::to_string)));

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Информация"</h4>
            <div class="form__group">
                <label class="form__label" for="product-type-name">"Название типа товара"</label>
                <input
                    type="text"
                    id="product-type-name"
                    name="name"
                    class=move || if name_error.get().is_some() {
                        "form__input form__input--error"
                    } else {
                        "form__input"
                    }
                    prop:value=move || vm.form.with(|f| f.data().name.clone())
                    disabled=move || disabled.get()
                    on:input=move |ev| vm.set_name(event_target_value(&ev))
                />
                {move || name_error.get().map(|e| view! {
                    <div class="form__error">{e}</div>
                })}
            </div>
        </div>
    }
}
