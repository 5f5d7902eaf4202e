//! Attributes section - attributes assigned to the product type
//!
//! Used twice on the page: product attributes and variant attributes.
//! Selection state comes from the page owner through [`ListActions`].

use crate::shared::components::table::{TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::list_actions::ListActions;
use contracts::domain::a025_product_type::{AttributeDetails, AttributeType, ReorderEvent};
use leptos::prelude::*;
use thaw::{
    Spinner, SpinnerSize, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

#[component]
pub fn AttributesSection(
    /// `None` while the product type is loading
    #[prop(into)]
    attributes: Signal<Option<Vec<AttributeDetails>>>,
    #[prop(into)] disabled: Signal<bool>,
    attribute_type: AttributeType,
    list: ListActions,
    on_attribute_assign: Callback<AttributeType>,
    on_attribute_click: Callback<String>,
    on_attribute_reorder: Callback<ReorderEvent>,
    on_attribute_unassign: Callback<String>,
) -> impl IntoView {
    let ids = Signal::derive(move || {
        attributes.with(|a| {
            a.as_ref()
                .map(|items| items.iter().map(|attr| attr.id.clone()).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });
    let selected_count = list.selected_count();
    let has_selection = Signal::derive(move || selected_count.get() > 0);
    let toolbar = list.toolbar.clone();
    let section_id = section_id(attribute_type);

    view! {
        <div class="details-section" id=section_id>
            <div class="details-section__header">
                <h4 class="details-section__title">{attribute_type.section_title()}</h4>
                <Button
                    variant="ghost"
                    size="sm"
                    disabled=disabled
                    on_click=Callback::new(move |_| on_attribute_assign.run(attribute_type))
                >
                    {icon("plus")}
                    " Назначить атрибут"
                </Button>
            </div>

            <Show when=move || has_selection.get()>
                <div class="list-toolbar">
                    <span class="list-toolbar__count">
                        {move || format!("Выбрано: {}", selected_count.get())}
                    </span>
                    {toolbar.clone().map(|t| t.run())}
                </div>
            </Show>

            {move || match attributes.get() {
                None => view! {
                    <div class="details-section__placeholder">
                        <Spinner size=SpinnerSize::Small />
                        <span>"Загрузка атрибутов..."</span>
                    </div>
                }.into_any(),
                Some(items) if items.is_empty() => view! {
                    <div class="details-section__placeholder">"Нет назначенных атрибутов"</div>
                }.into_any(),
                Some(items) => {
                    let count = items.len();
                    let header_list = list.clone();
                    let row_list = list.clone();
                    view! {
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCheckbox ids=ids list=header_list disabled=disabled />
                                    <TableHeaderCell resizable=true min_width=180.0>"Название"</TableHeaderCell>
                                    <TableHeaderCell resizable=true min_width=140.0>"Код"</TableHeaderCell>
                                    <TableHeaderCell resizable=false>""</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {items
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, attribute)| view! {
                                        <AttributeRow
                                            attribute=attribute
                                            index=index
                                            count=count
                                            list=row_list.clone()
                                            disabled=disabled
                                            on_click=on_attribute_click
                                            on_reorder=on_attribute_reorder
                                            on_unassign=on_attribute_unassign
                                        />
                                    })
                                    .collect_view()}
                            </TableBody>
                        </Table>
                    }.into_any()
                }
            }}
        </div>
    }
}

fn section_id(attribute_type: AttributeType) -> String {
    format!("{}-attributes", attribute_type.code().to_lowercase())
}

/// Up and down moves available for the row at `index`
fn row_moves(index: usize, count: usize) -> (Option<ReorderEvent>, Option<ReorderEvent>) {
    (ReorderEvent::up(index), ReorderEvent::down(index, count))
}

#[component]
fn AttributeRow(
    attribute: AttributeDetails,
    index: usize,
    count: usize,
    list: ListActions,
    disabled: Signal<bool>,
    on_click: Callback<String>,
    on_reorder: Callback<ReorderEvent>,
    on_unassign: Callback<String>,
) -> impl IntoView {
    let (up, down) = row_moves(index, count);
    let id_for_click = attribute.id.clone();
    let id_for_unassign = attribute.id.clone();

    view! {
        <TableRow
            class="table__row--clickable"
            on:click=move |_| on_click.run(id_for_click.clone())
        >
            <TableCellCheckbox item_id=attribute.id.clone() list=list disabled=disabled />
            <TableCell>
                <TableCellLayout truncate=true>{attribute.name.clone()}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>
                    {attribute.slug.clone().unwrap_or_else(|| "-".to_string())}
                </TableCellLayout>
            </TableCell>
            <TableCell on:click=|e| e.stop_propagation()>
                <div class="table__actions">
                    <Button
                        variant="ghost"
                        size="sm"
                        title="Выше"
                        disabled=Signal::derive(move || disabled.get() || up.is_none())
                        on_click=Callback::new(move |_| {
                            if let Some(event) = up {
                                on_reorder.run(event);
                            }
                        })
                    >
                        {icon("chevron-up")}
                    </Button>
                    <Button
                        variant="ghost"
                        size="sm"
                        title="Ниже"
                        disabled=Signal::derive(move || disabled.get() || down.is_none())
                        on_click=Callback::new(move |_| {
                            if let Some(event) = down {
                                on_reorder.run(event);
                            }
                        })
                    >
                        {icon("chevron-down")}
                    </Button>
                    <Button
                        variant="ghost"
                        size="sm"
                        title="Снять атрибут"
                        disabled=disabled
                        on_click=Callback::new(move |_| on_unassign.run(id_for_unassign.clone()))
                    >
                        {icon("trash")}
                    </Button>
                </div>
            </TableCell>
        </TableRow>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids() {
        assert_eq!(section_id(AttributeType::Product), "product-attributes");
        assert_eq!(section_id(AttributeType::Variant), "variant-attributes");
    }

    #[test]
    fn test_row_moves() {
        assert_eq!(row_moves(0, 3), (None, Some(ReorderEvent::new(0, 1))));
        assert_eq!(
            row_moves(1, 3),
            (Some(ReorderEvent::new(1, 0)), Some(ReorderEvent::new(1, 2)))
        );
        assert_eq!(row_moves(2, 3), (Some(ReorderEvent::new(2, 1)), None));
        assert_eq!(row_moves(0, 1), (None, None));
    }
}
