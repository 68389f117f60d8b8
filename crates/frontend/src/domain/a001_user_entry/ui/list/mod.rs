mod cards;
mod table;

pub use cards::UserEntryCards;
pub use table::{UserEntryRow, UserEntryTable};

use crate::domain::a001_user_entry::ui::details::RegistrationViewModel;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use contracts::shared::config::ListLayout;
use leptos::prelude::*;

/// Stored users, rendered as cards or as a table depending on the chosen layout
#[component]
pub fn UserEntryList(vm: RegistrationViewModel) -> impl IntoView {
    let title = Signal::derive(move || vm.layout.get().list_title().to_string());

    view! {
        <section class="page user-list">
            <PageHeader title=title>
                {ListLayout::all()
                    .into_iter()
                    .map(move |layout| view! {
                        <button
                            class="button button--secondary"
                            class:button--active=move || vm.layout.get() == layout
                            on:click=move |_| vm.set_layout(layout)
                        >
                            {icon(match layout {
                                ListLayout::Cards => "grid",
                                ListLayout::Table => "table",
                            })}
                            {layout.display_name()}
                        </button>
                    })
                    .collect_view()}
            </PageHeader>

            {move || {
                let entries = vm.records();
                let layout = vm.layout.get();
                if entries.is_empty() {
                    view! { <p class="empty-state">{layout.empty_text()}</p> }.into_any()
                } else {
                    match layout {
                        ListLayout::Cards => view! { <UserEntryCards vm=vm entries=entries /> }.into_any(),
                        ListLayout::Table => view! { <UserEntryTable vm=vm entries=entries /> }.into_any(),
                    }
                }
            }}
        </section>
    }
}
