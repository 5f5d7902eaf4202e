use leptos::prelude::*;

/// Checkbox bound to a form field.
///
/// `name` doubles as the element id so the label is clickable.
#[component]
pub fn ControlledCheckbox(
    /// Label text
    #[prop(into)]
    label: Signal<String>,
    /// Form field name
    name: &'static str,
    /// Checked state
    #[prop(into)]
    checked: Signal<bool>,
    /// Called with the new checked state
    on_change: Callback<bool>,
    /// Disabled state
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// Additional CSS classes for wrapper
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();
    let wrapper_class = move || {
        if disabled.get() {
            format!(
                "form__checkbox-wrapper form__checkbox-wrapper--disabled {}",
                additional_class()
            )
        } else {
            format!("form__checkbox-wrapper {}", additional_class())
        }
    };

    view! {
        <div class=wrapper_class>
            <input
                id=name
                name=name
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <label class="form__checkbox-label" for=name>
                {label}
            </label>
        </div>
    }
}
