use crate::domain::a025_product_type::ui::details::ProductTypeDetailsPage;
use crate::shared::components::ui::Button;
use crate::shared::components::ConfirmButtonTransitionState;
use crate::shared::config::load_config;
use crate::shared::host_events::{
    emit, listen, parse_product_type, parse_save_result, read_initial_product_type, LOAD_EVENT,
    SAVE_RESULT_EVENT,
};
use crate::shared::list_actions::{ListActions, ListSelection};
use contracts::domain::a025_product_type::{
    AttributeType, ProductTypeDetails, ProductTypeForm, ReorderEvent,
};
use contracts::shared::UserError;
use leptos::prelude::*;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AttributeReorder {
    attribute_type: AttributeType,
    old_index: usize,
    new_index: usize,
}

fn notify<T: Serialize>(action: &str, detail: &T) {
    if let Err(e) = emit(action, detail) {
        log::error!("product-type:{} not delivered: {}", action, e);
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn unassign_prompt(count: usize) -> String {
    if count == 1 {
        "Снять атрибут с типа товара?".to_string()
    } else {
        format!("Снять выбранные атрибуты ({}) с типа товара?", count)
    }
}

/// Move an attribute in the loaded product type; `false` when nothing moved
fn reorder_local(
    product_type: &mut Option<ProductTypeDetails>,
    kind: AttributeType,
    event: ReorderEvent,
) -> bool {
    product_type
        .as_mut()
        .is_some_and(|pt| pt.reorder_attributes(kind, event))
}

/// Drop attributes from the loaded product type, returns how many were found
fn unassign_local(product_type: &mut Option<ProductTypeDetails>, ids: &[String]) -> usize {
    product_type.as_mut().map_or(0, |pt| {
        ids.iter()
            .filter(|id| pt.unassign_attribute(id.as_str()))
            .count()
    })
}

/// Bulk actions for the checked rows of one attribute list
fn bulk_toolbar(
    selection: RwSignal<ListSelection>,
    on_unassign: Callback<Vec<String>>,
) -> ViewFn {
    ViewFn::from(move || {
        view! {
            <Button
                variant="ghost"
                size="sm"
                on_click=Callback::new(move |_| {
                    on_unassign.run(selection.with_untracked(|s| s.selected().to_vec()))
                })
            >
                "Снять выбранные"
            </Button>
        }
    })
}

/// Host of the details page: owns the loaded product type, list selections
/// and save state, and reports user actions to the embedding page.
#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    let product_type = RwSignal::new(read_initial_product_type());
    let errors = RwSignal::new(Vec::<UserError>::new());
    let save_state = RwSignal::new(ConfirmButtonTransitionState::Default);
    let product_selection = RwSignal::new(ListSelection::default());
    let variant_selection = RwSignal::new(ListSelection::default());

    let listening = listen(LOAD_EVENT, move |detail| {
        let Some(json) = detail else {
            log::warn!("{} without payload", LOAD_EVENT);
            return;
        };
        match parse_product_type(&json) {
            Ok(loaded) => {
                product_selection.update(ListSelection::reset);
                variant_selection.update(ListSelection::reset);
                errors.set(Vec::new());
                product_type.set(loaded);
            }
            Err(e) => log::error!("{}: {}", LOAD_EVENT, e),
        }
    });
    if let Err(e) = listening {
        log::error!("{}", e);
    }

    let listening = listen(SAVE_RESULT_EVENT, move |detail| {
        match detail.as_deref().map(parse_save_result) {
            Some(Ok(result)) => {
                log::info!("save result: success={}", result.success);
                save_state.set(if result.success {
                    ConfirmButtonTransitionState::Success
                } else {
                    ConfirmButtonTransitionState::Error
                });
                errors.set(result.errors);
            }
            Some(Err(e)) => {
                log::error!("{}: {}", SAVE_RESULT_EVENT, e);
                save_state.set(ConfirmButtonTransitionState::Error);
            }
            None => log::warn!("{} without payload", SAVE_RESULT_EVENT),
        }
    });
    if let Err(e) = listening {
        log::error!("{}", e);
    }

    let page_title = {
        let fallback = config.page_title.clone();
        Signal::derive(move || {
            product_type
                .with(|pt| pt.as_ref().and_then(|p| p.name.clone()))
                .unwrap_or_else(|| fallback.clone())
        })
    };
    let read_only = config.disabled;
    let disabled = Signal::derive(move || {
        read_only || save_state.get() == ConfirmButtonTransitionState::Loading
    });

    let on_attribute_add = Callback::new(move |kind: AttributeType| {
        log::info!("assign attribute: {}", kind.code());
        notify("attribute-add", &kind);
    });
    let on_attribute_click = Callback::new(move |id: String| {
        notify("attribute-click", &id);
    });
    let on_attribute_reorder = Callback::new(move |(event, kind): (ReorderEvent, AttributeType)| {
        let mut moved = false;
        product_type.update(|pt| moved = reorder_local(pt, kind, event));
        if moved {
            notify(
                "attribute-reorder",
                &AttributeReorder {
                    attribute_type: kind,
                    old_index: event.old_index,
                    new_index: event.new_index,
                },
            );
        } else {
            log::warn!("reorder out of range: {:?}", event);
        }
    });
    let unassign = Callback::new(move |ids: Vec<String>| {
        if ids.is_empty() || !confirm(&unassign_prompt(ids.len())) {
            return;
        }
        let mut removed = 0;
        product_type.update(|pt| removed = unassign_local(pt, &ids));
        log::info!("unassign {} attributes ({} found)", ids.len(), removed);
        for selection in [product_selection, variant_selection] {
            selection.update(|s| ids.iter().for_each(|id| s.forget(id)));
        }
        match ids.as_slice() {
            [id] => notify("attribute-unassign", id),
            _ => notify("attribute-unassign-many", &ids),
        }
    });
    let on_attribute_unassign = Callback::new(move |id: String| unassign.run(vec![id]));
    let on_back = Callback::new(move |_: ()| notify("back", &()));
    let on_delete = Callback::new(move |_: ()| {
        if confirm("Удалить тип товара?") {
            let id = product_type.with_untracked(|pt| pt.as_ref().and_then(|p| p.id.clone()));
            notify("delete", &id);
        }
    });
    let on_submit = Callback::new(move |form: ProductTypeForm| {
        errors.set(Vec::new());
        save_state.set(ConfirmButtonTransitionState::Loading);
        notify("submit", &form);
    });

    view! {
        <ProductTypeDetailsPage
            errors=errors
            product_type=product_type
            default_weight_unit=config.default_weight_unit
            disabled=disabled
            page_title=page_title
            product_attribute_list=ListActions::from_selection(
                product_selection,
                Some(bulk_toolbar(product_selection, unassign)),
            )
            variant_attribute_list=ListActions::from_selection(
                variant_selection,
                Some(bulk_toolbar(variant_selection, unassign)),
            )
            save_button_bar_state=save_state
            on_attribute_add=on_attribute_add
            on_attribute_click=on_attribute_click
            on_attribute_reorder=on_attribute_reorder
            on_attribute_unassign=on_attribute_unassign
            on_back=on_back
            on_delete=on_delete
            on_submit=on_submit
        />
    }
}
