use crate::domain::a001_user_entry::ui::details::RegistrationViewModel;
use crate::shared::icons::icon;
use contracts::domain::a001_user_entry::UserEntry;
use contracts::domain::common::AggregateId;
use contracts::enums::Hobby;
use leptos::prelude::*;

/// Card grid: one card per user with Edit and Delete buttons
#[component]
pub fn UserEntryCards(vm: RegistrationViewModel, entries: Vec<UserEntry>) -> impl IntoView {
    view! {
        <div class="card-grid">
            {entries
                .into_iter()
                .map(move |entry| {
                    let id = entry.id;
                    view! {
                        <div class="user-card" data-id=id.as_string()>
                            <h4 class="user-card__title">{entry.full_name()}</h4>
                            <div class="user-card__body">
                                <p><strong>"Age:"</strong>" "{entry.age}</p>
                                <p><strong>"Gender:"</strong>" "{entry.gender.code()}</p>
                                <p><strong>"Hobbies:"</strong>" "{Hobby::join(&entry.hobbies)}</p>
                                <p><strong>"Address:"</strong>" "{entry.address}</p>
                                <p><strong>"City:"</strong>" "{entry.city}</p>
                                <p><strong>"Pincode:"</strong>" "{entry.pincode}</p>
                            </div>
                            <div class="user-card__actions">
                                <button class="button button--primary" on:click=move |_| vm.begin_edit(id)>
                                    {icon("edit")}
                                    {"Edit"}
                                </button>
                                <button class="button button--danger" on:click=move |_| vm.request_delete(id)>
                                    {icon("delete")}
                                    {"Delete"}
                                </button>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
