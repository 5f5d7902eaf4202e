//! Компонент чекбокса в ячейке таблицы для выбора отдельной строки
//!
//! # Пример
//!
//! ```ignore
//! <TableCellCheckbox
//!     item_id=attribute.id.clone()
//!     list=list.clone()
//!     disabled=disabled
//! />
//! ```

use crate::shared::list_actions::ListActions;
use leptos::prelude::*;
use thaw::TableCell;

/// Row checkbox bound to a [`ListActions`] bundle.
///
/// Клик по чекбоксу не вызывает клик по строке (stop_propagation).
#[component]
pub fn TableCellCheckbox(
    /// ID текущего элемента
    #[prop(into)]
    item_id: String,
    list: ListActions,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let on_toggle = list.on_toggle;
    let id_for_change = item_id.clone();

    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || list.is_checked(&item_id)
                disabled=move || disabled.get()
                on:change=move |_| on_toggle.run(id_for_change.clone())
            />
        </TableCell>
    }
}
