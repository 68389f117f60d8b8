use crate::domain::common::AggregateId;
use crate::enums::{Gender, Hobby};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор записи пользователя (метка времени создания в мс)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserEntryId(pub i64);

impl UserEntryId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for UserEntryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s).map(UserEntryId::new)
    }
}

/// Генератор идентификаторов: метка времени, но строго возрастающая
/// в пределах одного запуска.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Учесть уже существующие идентификаторы, чтобы не выдать их повторно
    pub fn seeded_from(entries: &[UserEntry]) -> Self {
        let last = entries.iter().map(|e| e.id.0).max().unwrap_or(0);
        Self { last }
    }

    pub fn next_at(&mut self, now: DateTime<Utc>) -> UserEntryId {
        let candidate = now.timestamp_millis().max(self.last + 1);
        self.last = candidate;
        UserEntryId(candidate)
    }

    pub fn next(&mut self) -> UserEntryId {
        self.next_at(Utc::now())
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Зарегистрированный пользователь, как он лежит в хранилище
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEntry {
    #[serde(rename = "firstName")]
    pub first_name: String,

    #[serde(rename = "lastName")]
    pub last_name: String,

    /// Как ввёл пользователь (строка из цифр), в хранилище тоже строкой
    pub age: String,

    #[serde(rename = "dateOfBirth", default, with = "iso_datetime")]
    pub date_of_birth: Option<DateTime<Utc>>,

    pub gender: Gender,
    pub hobbies: Vec<Hobby>,
    pub address: String,
    pub city: String,
    pub pincode: String,
    pub id: UserEntryId,
}

impl UserEntry {
    /// Полное имя для заголовка карточки и диалога удаления
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Дата рождения в локальном часовом поясе (для поля ввода даты)
    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.date_of_birth.as_ref().map(local_date)
    }
}

/// Календарная дата момента времени в локальном часовом поясе браузера
pub fn local_date(value: &DateTime<Utc>) -> NaiveDate {
    value.with_timezone(&Local).date_naive()
}

/// Локальная полночь выбранной даты, приведённая к UTC.
/// Так дату записывает форма: `2 апреля` в IST хранится как `1995-04-01T18:30:00.000Z`.
pub fn local_midnight(date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::default());
    match midnight.and_local_timezone(Local).earliest() {
        Some(dt) => dt.with_timezone(&Utc),
        // полночь попала в переход на летнее время
        None => midnight.and_utc(),
    }
}

// ============================================================================
// Draft
// ============================================================================

/// Черновик формы: значения полей в том виде, в котором их ввёл пользователь
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserEntryDraft {
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: String,
    pub hobbies: Vec<Hobby>,
    pub address: String,
    pub city: String,
    pub pincode: String,

    /// Момент из редактируемой записи; пишется обратно без изменений,
    /// пока пользователь не выберет другую дату
    pub stored_date_of_birth: Option<DateTime<Utc>>,
}

impl From<&UserEntry> for UserEntryDraft {
    fn from(entry: &UserEntry) -> Self {
        Self {
            first_name: entry.first_name.clone(),
            last_name: entry.last_name.clone(),
            age: entry.age.clone(),
            date_of_birth: entry.birth_date(),
            gender: entry.gender.code().to_string(),
            hobbies: entry.hobbies.clone(),
            address: entry.address.clone(),
            city: entry.city.clone(),
            pincode: entry.pincode.clone(),
            stored_date_of_birth: entry.date_of_birth,
        }
    }
}

impl UserEntryDraft {
    /// Собрать запись из черновика. `None`, если черновик не проходит разбор;
    /// полная проверка выполняется в `validation::validate`.
    pub fn finalize(&self, id: UserEntryId) -> Option<UserEntry> {
        Some(UserEntry {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age.clone(),
            date_of_birth: self.finalize_date_of_birth(),
            gender: Gender::from_code(&self.gender)?,
            hobbies: self.hobbies.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            pincode: self.pincode.clone(),
            id,
        })
    }

    fn finalize_date_of_birth(&self) -> Option<DateTime<Utc>> {
        match self.stored_date_of_birth {
            Some(stored) if self.date_of_birth == Some(local_date(&stored)) => Some(stored),
            _ => self.date_of_birth.map(local_midnight),
        }
    }
}

// ============================================================================
// Serde helpers
// ============================================================================

/// ISO-8601 с миллисекундами и суффиксом `Z` (формат `Date.toISOString()`)
mod iso_datetime {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            None => Ok(None),
            Some(s) => DateTime::parse_from_rfc3339(&s)
                .map(|dt| Some(dt.with_timezone(&Utc)))
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Запись в том виде, в котором её сохраняет форма в браузере (IST)
    const BROWSER_RECORD: &str = r#"{"firstName":"Amit","lastName":"Shah","age":"29","dateOfBirth":"1995-04-01T18:30:00.000Z","gender":"Male","hobbies":["Gaming","Swimming"],"address":"221B","city":"Pune","pincode":"411001","id":1700000000000}"#;

    fn sample() -> UserEntry {
        UserEntry {
            first_name: "Amit".into(),
            last_name: "Shah".into(),
            age: "29".into(),
            date_of_birth: Some(Utc.with_ymd_and_hms(1995, 4, 2, 0, 0, 0).unwrap()),
            gender: Gender::Male,
            hobbies: vec![Hobby::Gaming],
            address: "221B".into(),
            city: "Pune".into(),
            pincode: "411001".into(),
            id: UserEntryId(1_700_000_000_000),
        }
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"firstName":"Amit","lastName":"Shah","age":"29","dateOfBirth":"1995-04-02T00:00:00.000Z","gender":"Male","hobbies":["Gaming"],"address":"221B","city":"Pune","pincode":"411001","id":1700000000000}"#
        );
    }

    #[test]
    fn test_browser_record_is_rewritten_unchanged() {
        let entry: UserEntry = serde_json::from_str(BROWSER_RECORD).unwrap();
        assert_eq!(entry.age, "29");
        assert_eq!(entry.hobbies, vec![Hobby::Gaming, Hobby::Swimming]);
        assert_eq!(serde_json::to_string(&entry).unwrap(), BROWSER_RECORD);
    }

    #[test]
    fn test_numeric_age_or_pincode_is_rejected() {
        let numeric_age = BROWSER_RECORD.replace(r#""age":"29""#, r#""age":29"#);
        assert!(serde_json::from_str::<UserEntry>(&numeric_age).is_err());

        let numeric_pincode = BROWSER_RECORD.replace(r#""pincode":"411001""#, r#""pincode":411001"#);
        assert!(serde_json::from_str::<UserEntry>(&numeric_pincode).is_err());
    }

    #[test]
    fn test_missing_date_of_birth_is_none() {
        let json = r#"{"firstName":"A","lastName":"B","age":"3","gender":"Others","hobbies":["Gaming"],"address":"x","city":"y","pincode":"411001","id":5}"#;
        let entry: UserEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.date_of_birth, None);
    }

    #[test]
    fn test_draft_round_trip_keeps_stored_date() {
        let entry: UserEntry = serde_json::from_str(BROWSER_RECORD).unwrap();
        let draft = UserEntryDraft::from(&entry);
        assert_eq!(draft.age, "29");
        assert_eq!(draft.date_of_birth, entry.birth_date());
        assert_eq!(draft.finalize(entry.id), Some(entry));
    }

    #[test]
    fn test_changed_date_is_written_as_local_midnight() {
        let entry = sample();
        let mut draft = UserEntryDraft::from(&entry);
        let new_date = NaiveDate::from_ymd_opt(2000, 1, 15).unwrap();
        draft.date_of_birth = Some(new_date);

        let written = draft.finalize(entry.id).unwrap().date_of_birth.unwrap();

        assert_eq!(local_date(&written), new_date);
        assert_eq!(written, local_midnight(new_date));
    }

    #[test]
    fn test_local_midnight_maps_back_to_same_date() {
        let date = NaiveDate::from_ymd_opt(1995, 4, 2).unwrap();
        assert_eq!(local_date(&local_midnight(date)), date);
    }

    #[test]
    fn test_id_generator_is_strictly_increasing() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut ids = IdGenerator::default();
        let a = ids.next_at(now);
        let b = ids.next_at(now);
        assert_eq!(a.value(), now.timestamp_millis());
        assert_eq!(b.value(), a.value() + 1);
    }

    #[test]
    fn test_id_generator_skips_existing_ids() {
        let entry = sample();
        let mut ids = IdGenerator::seeded_from(std::slice::from_ref(&entry));
        let earlier = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(ids.next_at(earlier).value(), entry.id.value() + 1);
    }

    #[test]
    fn test_id_string_conversion() {
        let id = UserEntryId::from_string("42").unwrap();
        assert_eq!(id.as_string(), "42");
        assert!(UserEntryId::from_string("abc").is_err());
    }
}
