use leptos::prelude::*;

/// DateInput component with native date picker
/// Browser displays the date in the user's locale format
#[component]
pub fn DateInput(
    /// Element id, so a `<label for=..>` can point at it
    id: &'static str,
    /// The date value in yyyy-mm-dd format (empty when unset)
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format, empty when cleared)
    on_change: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <input
            type="date"
            id=id
            class="form-input"
            prop:value=value
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
