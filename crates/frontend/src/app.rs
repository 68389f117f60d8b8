use crate::domain::a001_user_entry::ui::delete_dialog::DeleteDialog;
use crate::domain::a001_user_entry::ui::details::{RegistrationViewModel, UserEntryDetails};
use crate::domain::a001_user_entry::ui::list::UserEntryList;
use crate::shared::config::load_app_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_app_config();

    // One view model owns the form state and the record store for the whole page.
    let vm = RegistrationViewModel::new(&config);

    view! {
        <main class="app registration-app">
            <UserEntryDetails vm=vm />
            <UserEntryList vm=vm />
            <DeleteDialog vm=vm />
        </main>
    }
}
