use leptos::prelude::*;

/// PageHeader component - title row of a detail page
#[component]
pub fn PageHeader(
    /// Page title
    #[prop(into)]
    title: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <h1 class="page-header__title">{move || title.get()}</h1>
            </div>
        </div>
    }
}
