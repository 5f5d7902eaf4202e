//! Bottom action bar of detail pages: cancel, delete and save.

use super::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

/// How long the save button keeps showing "saved"/"error"
pub const COMPLETED_STATE_MS: u32 = 2000;

/// Transition state of a confirm (save) button, driven by the page owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmButtonTransitionState {
    #[default]
    Default,
    Loading,
    Success,
    Error,
}

impl ConfirmButtonTransitionState {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Default => "Сохранить",
            Self::Loading => "Сохранение...",
            Self::Success => "Сохранено",
            Self::Error => "Ошибка",
        }
    }
}

/// State the button actually shows: a completed state only while its timer runs
pub fn displayed_state(
    state: ConfirmButtonTransitionState,
    show_completed: bool,
) -> ConfirmButtonTransitionState {
    if state.is_completed() && !show_completed {
        ConfirmButtonTransitionState::Default
    } else {
        state
    }
}

/// Numbers completed-state timers so only the latest one may expire the state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletedTimer {
    generation: u32,
}

impl CompletedTimer {
    /// Start a new timer and return its ticket
    pub fn start(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    pub fn is_current(&self, ticket: u32) -> bool {
        self.generation == ticket
    }
}

#[component]
pub fn SaveButtonBar(
    #[prop(into)] state: Signal<ConfirmButtonTransitionState>,
    /// Disables save only; cancel and delete stay available
    #[prop(into)]
    disabled: Signal<bool>,
    on_cancel: Callback<()>,
    on_save: Callback<()>,
    #[prop(optional)] on_delete: Option<Callback<()>>,
) -> impl IntoView {
    let show_completed = RwSignal::new(false);
    let timer = StoredValue::new(CompletedTimer::default());

    Effect::new(move |_| {
        if state.get().is_completed() {
            let ticket = timer.try_update_value(|t| t.start()).unwrap_or_default();
            show_completed.set(true);
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(COMPLETED_STATE_MS).await;
                if timer.try_with_value(|t| t.is_current(ticket)).unwrap_or(false) {
                    show_completed.set(false);
                }
            });
        }
    });

    let shown = Signal::derive(move || displayed_state(state.get(), show_completed.get()));
    let save_disabled =
        Signal::derive(move || disabled.get() || shown.get() == ConfirmButtonTransitionState::Loading);

    let save_class = move || match shown.get() {
        ConfirmButtonTransitionState::Success => "save-bar__save save-bar__save--success",
        ConfirmButtonTransitionState::Error => "save-bar__save save-bar__save--error",
        _ => "save-bar__save",
    };

    view! {
        <div class="save-bar">
            <div class="save-bar__left">
                {on_delete.map(|on_delete| view! {
                    <Button
                        variant="danger"
                        on_click=Callback::new(move |_| on_delete.run(()))
                    >
                        {icon("trash")}
                        " Удалить"
                    </Button>
                })}
            </div>
            <div class="save-bar__right">
                <Button
                    variant="secondary"
                    on_click=Callback::new(move |_| on_cancel.run(()))
                >
                    {icon("x")}
                    " Отмена"
                </Button>
                <Button
                    class=Signal::derive(move || save_class().to_string())
                    disabled=save_disabled
                    on_click=Callback::new(move |_| on_save.run(()))
                >
                    {move || match shown.get() {
                        ConfirmButtonTransitionState::Loading => {
                            view! { <Spinner size=SpinnerSize::Tiny /> }.into_any()
                        }
                        ConfirmButtonTransitionState::Success => icon("check"),
                        ConfirmButtonTransitionState::Error => icon("alert"),
                        ConfirmButtonTransitionState::Default => icon("save"),
                    }}
                    {move || format!(" {}", shown.get().label())}
                </Button>
            </div>
        </div>
    }
}
