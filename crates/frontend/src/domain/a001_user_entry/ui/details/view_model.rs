use crate::shared::date_utils::to_input_value;
use crate::shared::local_storage::{load_layout, save_layout, BrowserStorage};
use contracts::domain::a001_user_entry::{
    Field, RecordStore, RegistrationForm, SubmitError, SubmitOutcome, UserEntry, UserEntryId,
};
use contracts::enums::Hobby;
use contracts::shared::config::{AppConfig, ListLayout};
use leptos::prelude::*;

/// ViewModel shared by the registration form, the user list and the delete dialog.
///
/// All state lives in one `RegistrationForm`; the views only read it through
/// the accessors below and mutate it through the commands.
#[derive(Clone, Copy)]
pub struct RegistrationViewModel {
    pub form: RwSignal<RegistrationForm<BrowserStorage>>,
    /// Failed-save notice shown above the form
    pub notice: RwSignal<Option<String>>,
    pub layout: RwSignal<ListLayout>,
    layout_key: StoredValue<String>,
}

impl RegistrationViewModel {
    pub fn new(config: &AppConfig) -> Self {
        let store = RecordStore::new(BrowserStorage, config.storage.records_key.clone());
        let form = RegistrationForm::open(store);
        log::info!("Loaded {} user entries", form.records().len());

        let layout_key = config.storage.layout_key.clone();
        let layout = load_layout(&layout_key).unwrap_or(config.ui.default_layout);

        Self {
            form: RwSignal::new(form),
            notice: RwSignal::new(None),
            layout: RwSignal::new(layout),
            layout_key: StoredValue::new(layout_key),
        }
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn field_value(&self, field: Field) -> String {
        self.form.with(|f| {
            let d = f.draft();
            match field {
                Field::FirstName => d.first_name.clone(),
                Field::LastName => d.last_name.clone(),
                Field::Age => d.age.clone(),
                Field::DateOfBirth => to_input_value(d.date_of_birth),
                Field::Gender => d.gender.clone(),
                Field::Hobbies => Hobby::join(&d.hobbies),
                Field::Address => d.address.clone(),
                Field::City => d.city.clone(),
                Field::Pincode => d.pincode.clone(),
            }
        })
    }

    pub fn field_error(&self, field: Field) -> Option<&'static str> {
        self.form.with(|f| f.errors().message(field))
    }

    pub fn is_hobby_selected(&self, hobby: Hobby) -> bool {
        self.form.with(|f| f.draft().hobbies.contains(&hobby))
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit_mode())
    }

    pub fn submit_label(&self) -> &'static str {
        let (create, update) = self.layout.get().submit_labels();
        if self.is_edit_mode() {
            update
        } else {
            create
        }
    }

    pub fn records(&self) -> Vec<UserEntry> {
        self.form.with(|f| f.records().to_vec())
    }

    pub fn is_delete_pending(&self) -> bool {
        self.form.with(|f| f.is_delete_pending())
    }

    pub fn pending_delete_name(&self) -> Option<String> {
        self.form
            .with(|f| f.pending_delete().map(UserEntry::full_name))
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    pub fn on_input(&self, field: Field, value: String) {
        self.form.update(|f| f.update_field(field, &value));
    }

    pub fn toggle_hobby(&self, hobby: Hobby, selected: bool) {
        self.form.update(|f| f.toggle_hobby(hobby, selected));
    }

    pub fn begin_edit(&self, id: UserEntryId) {
        self.form.update(|f| {
            if let Some(entry) = f.find(id).cloned() {
                f.begin_edit(&entry);
            }
        });
        self.notice.set(None);
    }

    pub fn cancel_edit(&self) {
        self.form.update(|f| f.reset());
        self.notice.set(None);
    }

    /// Validate and save the draft
    pub fn submit_command(&self) {
        let Some(result) = self.form.try_update(|f| f.submit()) else {
            return;
        };

        match result {
            Ok(SubmitOutcome::Created(id)) => {
                log::info!("Created user entry {}", id.value());
                self.notice.set(None);
            }
            Ok(SubmitOutcome::Updated(id)) => {
                log::info!("Updated user entry {}", id.value());
                self.notice.set(None);
            }
            Err(SubmitError::Validation(errors)) => {
                log::debug!("Submit blocked: {}", errors);
            }
            Err(SubmitError::Store(e)) => {
                log::error!("Failed to save user entry: {}", e);
                self.notice.set(Some(format!(
                    "Could not save to browser storage ({e}). Changes are kept on this page only."
                )));
            }
        }
    }

    pub fn request_delete(&self, id: UserEntryId) {
        self.form.update(|f| f.request_delete(id));
    }

    pub fn cancel_delete(&self) {
        self.form.update(|f| f.cancel_delete());
    }

    pub fn confirm_delete_command(&self) {
        let Some(result) = self.form.try_update(|f| f.confirm_delete()) else {
            return;
        };

        match result {
            Ok(Some(id)) => log::info!("Deleted user entry {}", id.value()),
            Ok(None) => {}
            Err(e) => {
                log::error!("Failed to delete user entry: {}", e);
                self.notice.set(Some(format!(
                    "Could not update browser storage ({e}). The entry is removed on this page only."
                )));
            }
        }
    }

    pub fn set_layout(&self, layout: ListLayout) {
        self.layout.set(layout);
        self.layout_key
            .with_value(|key| save_layout(key, layout));
    }
}
