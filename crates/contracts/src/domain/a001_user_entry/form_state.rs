//! Состояние формы регистрации: черновик, флаги ошибок, режим
//! редактирования и двухшаговое удаление.

use super::aggregate::{IdGenerator, UserEntry, UserEntryDraft, UserEntryId};
use super::store::{apply_remove, apply_upsert, KeyValueStore, RecordStore, StoreError};
use super::validation::{is_field_invalid, validate, Field, FieldErrors};
use crate::enums::Hobby;
use chrono::NaiveDate;
use thiserror::Error;

/// Результат успешной отправки формы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(UserEntryId),
    Updated(UserEntryId),
}

impl SubmitOutcome {
    pub fn id(&self) -> UserEntryId {
        match self {
            SubmitOutcome::Created(id) | SubmitOutcome::Updated(id) => *id,
        }
    }
}

/// Ошибки отправки формы
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Менеджер состояния формы. Владеет хранилищем и копией списка в памяти.
#[derive(Debug, Clone)]
pub struct RegistrationForm<S> {
    store: RecordStore<S>,
    records: Vec<UserEntry>,
    draft: UserEntryDraft,
    errors: FieldErrors,
    editing_id: Option<UserEntryId>,
    pending_delete: Option<UserEntryId>,
    ids: IdGenerator,
}

impl<S: KeyValueStore> RegistrationForm<S> {
    /// Загрузить список из хранилища. Ошибки чтения не фатальны: стартуем с пустого списка.
    pub fn open(store: RecordStore<S>) -> Self {
        let records = match store.load_all() {
            Ok(records) => records,
            Err(e) => {
                log::warn!("Starting with an empty user list: {}", e);
                Vec::new()
            }
        };
        let ids = IdGenerator::seeded_from(&records);

        Self {
            store,
            records,
            draft: UserEntryDraft::default(),
            errors: FieldErrors::default(),
            editing_id: None,
            pending_delete: None,
            ids,
        }
    }

    pub fn records(&self) -> &[UserEntry] {
        &self.records
    }

    pub fn draft(&self) -> &UserEntryDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn editing_id(&self) -> Option<UserEntryId> {
        self.editing_id
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    pub fn find(&self, id: UserEntryId) -> Option<&UserEntry> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Записать введённое значение в черновик и пересчитать флаг этого поля
    pub fn update_field(&mut self, field: Field, raw: &str) {
        match field {
            Field::FirstName => self.draft.first_name = raw.to_string(),
            Field::LastName => self.draft.last_name = raw.to_string(),
            Field::Age => self.draft.age = raw.to_string(),
            Field::DateOfBirth => {
                self.draft.date_of_birth = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
            }
            Field::Gender => self.draft.gender = raw.to_string(),
            Field::Hobbies => {
                let mut hobbies = Vec::new();
                for hobby in raw.split(',').filter_map(|s| Hobby::from_code(s.trim())) {
                    if !hobbies.contains(&hobby) {
                        hobbies.push(hobby);
                    }
                }
                self.draft.hobbies = hobbies;
            }
            Field::Address => self.draft.address = raw.to_string(),
            Field::City => self.draft.city = raw.to_string(),
            Field::Pincode => self.draft.pincode = raw.to_string(),
        }
        self.errors.set(field, is_field_invalid(field, &self.draft));
    }

    pub fn toggle_hobby(&mut self, hobby: Hobby, selected: bool) {
        let hobbies = &mut self.draft.hobbies;
        if selected {
            if !hobbies.contains(&hobby) {
                hobbies.push(hobby);
            }
        } else {
            hobbies.retain(|h| *h != hobby);
        }
        self.errors
            .set(Field::Hobbies, is_field_invalid(Field::Hobbies, &self.draft));
    }

    /// Перенести запись в черновик и перейти в режим редактирования
    pub fn begin_edit(&mut self, entry: &UserEntry) {
        self.draft = UserEntryDraft::from(entry);
        self.errors = FieldErrors::default();
        self.editing_id = Some(entry.id);
    }

    /// Сбросить черновик и выйти из режима редактирования
    pub fn reset(&mut self) {
        self.draft = UserEntryDraft::default();
        self.errors = FieldErrors::default();
        self.editing_id = None;
    }

    /// Проверить все поля и сохранить запись.
    ///
    /// В хранилище записывается список из памяти целиком, поэтому записи,
    /// не сохранённые раньше из-за ошибки, попадают туда со следующей
    /// успешной записью.
    ///
    /// При ошибке записи в хранилище список в памяти уже содержит изменение,
    /// черновик сохраняется, а форма остаётся (или переходит) в режим
    /// редактирования этой записи.
    pub fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        self.errors = validate(&self.draft);
        if self.errors.has_any() {
            return Err(SubmitError::Validation(self.errors));
        }

        let (id, outcome) = match self.editing_id {
            Some(id) => (id, SubmitOutcome::Updated(id)),
            None => {
                let id = self.ids.next();
                (id, SubmitOutcome::Created(id))
            }
        };

        let entry = self
            .draft
            .finalize(id)
            .ok_or(SubmitError::Validation(self.errors))?;

        apply_upsert(&mut self.records, entry);
        match self.store.save_all(&self.records) {
            Ok(()) => {
                self.reset();
                Ok(outcome)
            }
            Err(e) => {
                // повторная отправка должна заменить запись, а не создать вторую
                self.editing_id = Some(id);
                Err(SubmitError::Store(e))
            }
        }
    }

    /// Шаг 1 удаления: запомнить кандидата и открыть подтверждение
    pub fn request_delete(&mut self, id: UserEntryId) {
        self.pending_delete = Some(id);
    }

    pub fn is_delete_pending(&self) -> bool {
        self.pending_delete.is_some()
    }

    /// Запись, ожидающая подтверждения удаления
    pub fn pending_delete(&self) -> Option<&UserEntry> {
        self.pending_delete.and_then(|id| self.find(id))
    }

    /// Отменить удаление, хранилище не трогаем
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Шаг 2 удаления: удалить кандидата из списка и записать список в хранилище.
    /// Возвращает ID удалённой записи (`None`, если нечего было удалять).
    /// При ошибке записи запись остаётся удалённой в памяти.
    pub fn confirm_delete(&mut self) -> Result<Option<UserEntryId>, StoreError> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(None);
        };

        if self.editing_id == Some(id) {
            self.reset();
        }

        let removed = apply_remove(&mut self.records, id);
        self.store.save_all(&self.records)?;
        Ok(removed.then_some(id))
    }
}
