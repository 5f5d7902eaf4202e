use crate::shared::icons::icon;
use leptos::prelude::*;

/// Back-navigation link shown above the page title
#[component]
pub fn AppHeader(
    /// Called when the user navigates back
    on_back: Callback<()>,
    /// Section name the back link returns to
    children: Children,
) -> impl IntoView {
    view! {
        <div class="app-header">
            <button
                type="button"
                class="app-header__back"
                on:click=move |_| on_back.run(())
            >
                {icon("arrow-left")}
                <span class="app-header__label">{children()}</span>
            </button>
        </div>
    }
}
