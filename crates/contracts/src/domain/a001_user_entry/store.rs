//! Хранение списка пользователей в строковом хранилище «ключ → значение».
//!
//! Весь список сериализуется в JSON и перезаписывается целиком под одним
//! ключом. Последняя запись побеждает.

use super::aggregate::{UserEntry, UserEntryId};
use std::collections::HashMap;
use thiserror::Error;

/// Ошибки хранилища
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Stored user entries are corrupt: {0}")]
    Corrupt(String),

    #[error("Failed to save user entries: {0}")]
    Write(String),
}

/// Строковое хранилище (в браузере — `window.localStorage`)
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Хранилище в памяти для тестов и окружений без браузера
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.items.insert(key.to_string(), value.to_string());
        store
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Заменить запись с тем же ID на месте или добавить в конец
pub fn apply_upsert(records: &mut Vec<UserEntry>, entry: UserEntry) {
    match records.iter_mut().find(|r| r.id == entry.id) {
        Some(existing) => *existing = entry,
        None => records.push(entry),
    }
}

/// Удалить запись по ID; возвращает `true`, если что-то удалено
pub fn apply_remove(records: &mut Vec<UserEntry>, id: UserEntryId) -> bool {
    let before = records.len();
    records.retain(|r| r.id != id);
    records.len() != before
}

/// Адаптер списка пользователей поверх `KeyValueStore`
#[derive(Debug, Clone)]
pub struct RecordStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> RecordStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Прочитать весь список. Отсутствующий ключ или пустая строка — пустой список.
    pub fn load_all(&self) -> Result<Vec<UserEntry>, StoreError> {
        match self.backend.get_item(&self.key)? {
            None => Ok(Vec::new()),
            Some(raw) if raw.is_empty() => Ok(Vec::new()),
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt(e.to_string()))
            }
        }
    }

    /// Записать весь список, перезаписав предыдущее содержимое
    pub fn save_all(&mut self, records: &[UserEntry]) -> Result<(), StoreError> {
        let json = serde_json::to_string(records).map_err(|e| StoreError::Write(e.to_string()))?;
        self.backend.set_item(&self.key, &json)?;
        log::debug!("Saved {} user entries under '{}'", records.len(), self.key);
        Ok(())
    }

    /// Список для изменения: повреждённое содержимое считается пустым
    fn load_for_update(&self) -> Result<Vec<UserEntry>, StoreError> {
        match self.load_all() {
            Err(StoreError::Corrupt(reason)) => {
                log::warn!("Overwriting corrupt user entries under '{}': {}", self.key, reason);
                Ok(Vec::new())
            }
            other => other,
        }
    }

    pub fn upsert(&mut self, entry: UserEntry) -> Result<Vec<UserEntry>, StoreError> {
        let mut records = self.load_for_update()?;
        apply_upsert(&mut records, entry);
        self.save_all(&records)?;
        Ok(records)
    }

    pub fn remove(&mut self, id: UserEntryId) -> Result<Vec<UserEntry>, StoreError> {
        let mut records = self.load_for_update()?;
        apply_remove(&mut records, id);
        self.save_all(&records)?;
        Ok(records)
    }
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::*;
    use crate::enums::{Gender, Hobby};

    pub const KEY: &str = "usersData";

    pub fn entry(id: i64, first_name: &str, city: &str) -> UserEntry {
        UserEntry {
            first_name: first_name.into(),
            last_name: "Shah".into(),
            age: "29".into(),
            date_of_birth: None,
            gender: Gender::Male,
            hobbies: vec![Hobby::Gaming],
            address: "221B".into(),
            city: city.into(),
            pincode: "411001".into(),
            id: UserEntryId(id),
        }
    }

    /// Хранилище, которое читает нормально, но отказывает в записи
    #[derive(Debug, Clone, Default)]
    pub struct FullStore {
        pub inner: MemoryStore,
    }

    impl KeyValueStore for FullStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get_item(key)
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Write("QuotaExceededError".into()))
        }
    }

    /// Хранилище, отказывающее в первых `failures` записях
    #[derive(Debug, Clone, Default)]
    pub struct FlakyStore {
        pub inner: MemoryStore,
        pub failures: usize,
    }

    impl FlakyStore {
        pub fn failing(failures: usize) -> Self {
            Self {
                inner: MemoryStore::new(),
                failures,
            }
        }
    }

    impl KeyValueStore for FlakyStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.inner.get_item(key)
        }

        fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            if self.failures > 0 {
                self.failures -= 1;
                return Err(StoreError::Write("QuotaExceededError".into()));
            }
            self.inner.set_item(key, value)
        }
    }
}
