use crate::domain::a001_user_entry::ui::details::RegistrationViewModel;
use crate::shared::date_utils::format_optional_date;
use crate::shared::icons::icon;
use contracts::domain::a001_user_entry::UserEntry;
use contracts::enums::Hobby;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct UserEntryRow {
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub gender: String,
    pub date_of_birth: String,
    pub hobbies: String,
}

impl From<&UserEntry> for UserEntryRow {
    fn from(e: &UserEntry) -> Self {
        Self {
            first_name: e.first_name.clone(),
            last_name: e.last_name.clone(),
            age: e.age.clone(),
            gender: e.gender.code().to_string(),
            date_of_birth: format_optional_date(e.date_of_birth.as_ref()),
            hobbies: Hobby::join(&e.hobbies),
        }
    }
}

#[component]
pub fn UserEntryTable(vm: RegistrationViewModel, entries: Vec<UserEntry>) -> impl IntoView {
    view! {
        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">{"First Name"}</th>
                        <th class="table__header-cell">{"Last Name"}</th>
                        <th class="table__header-cell">{"Age"}</th>
                        <th class="table__header-cell">{"Gender"}</th>
                        <th class="table__header-cell">{"Date of Birth"}</th>
                        <th class="table__header-cell">{"Hobbies"}</th>
                        <th class="table__header-cell">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    {entries
                        .iter()
                        .map(move |entry| {
                            let id = entry.id;
                            let row = UserEntryRow::from(entry);
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{row.first_name}</td>
                                    <td class="table__cell">{row.last_name}</td>
                                    <td class="table__cell">{row.age}</td>
                                    <td class="table__cell">{row.gender}</td>
                                    <td class="table__cell">{row.date_of_birth}</td>
                                    <td class="table__cell">{row.hobbies}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button class="button button--secondary" on:click=move |_| vm.begin_edit(id)>
                                            {icon("edit")}
                                            {"Edit"}
                                        </button>
                                        <button class="button button--danger" on:click=move |_| vm.request_delete(id)>
                                            {icon("delete")}
                                            {"Delete"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}
