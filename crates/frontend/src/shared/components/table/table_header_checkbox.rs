//! Компонент чекбокса в заголовке таблицы для выбора всех строк

use crate::shared::list_actions::{header_checkbox_state, CheckboxState, ListActions};
use leptos::prelude::*;
use thaw::TableHeaderCell;
use wasm_bindgen::JsCast;

/// Компонент чекбокса в заголовке таблицы
///
/// - Показывает три состояния: unchecked, checked, indeterminate
/// - При клике переключает между "выбрать все" и "снять все"
#[component]
pub fn TableHeaderCheckbox(
    /// ID всех строк таблицы
    #[prop(into)]
    ids: Signal<Vec<String>>,
    list: ListActions,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let selected = list.selected;
    let on_toggle_all = list.on_toggle_all;

    let checkbox_state = Signal::derive(move || {
        let ids = ids.get();
        let selected = selected.get();
        let count = ids.iter().filter(|id| selected.contains(id)).count();
        header_checkbox_state(ids.len(), count)
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate нельзя задать атрибутом, только через DOM
    Effect::new(move |_| {
        let state = checkbox_state.get();
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(matches!(state, CheckboxState::Indeterminate));
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(checkbox_state.get(), CheckboxState::Checked)
                disabled=move || disabled.get() || ids.with(Vec::is_empty)
                on:change=move |_| on_toggle_all.run(ids.get_untracked())
            />
        </TableHeaderCell>
    }
}
