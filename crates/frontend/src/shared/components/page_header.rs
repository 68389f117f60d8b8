use leptos::prelude::*;

/// PageHeader component - section header with title and optional actions
#[component]
pub fn PageHeader(
    /// Section title (required)
    #[prop(into)]
    title: Signal<String>,

    /// Children content (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <h1 class="page-header__title">{move || title.get()}</h1>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
