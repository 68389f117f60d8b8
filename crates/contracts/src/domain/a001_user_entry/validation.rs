//! Правила проверки полей формы регистрации.
//!
//! Одна и та же функция `is_field_invalid` используется и при изменении
//! отдельного поля, и при отправке формы (`validate`).

use super::aggregate::UserEntryDraft;
use crate::enums::Gender;
use std::str::FromStr;

/// Поля формы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Age,
    DateOfBirth,
    Gender,
    Hobbies,
    Address,
    City,
    Pincode,
}

impl Field {
    /// Поля, у которых есть флаг ошибки (дата рождения не проверяется)
    pub const VALIDATED: [Field; 8] = [
        Field::FirstName,
        Field::LastName,
        Field::Age,
        Field::Gender,
        Field::Hobbies,
        Field::Address,
        Field::City,
        Field::Pincode,
    ];

    /// Имя поля в JSON и атрибут `id` элемента формы
    pub fn name(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Age => "age",
            Field::DateOfBirth => "dateOfBirth",
            Field::Gender => "gender",
            Field::Hobbies => "hobbies",
            Field::Address => "address",
            Field::City => "city",
            Field::Pincode => "pincode",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Age => "Age",
            Field::DateOfBirth => "Date of Birth",
            Field::Gender => "Gender",
            Field::Hobbies => "Hobbies",
            Field::Address => "Address",
            Field::City => "City",
            Field::Pincode => "Pincode",
        }
    }

    /// Текст подсказки под полем с ошибкой
    pub fn error_message(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name is required",
            Field::LastName => "Last Name is required",
            Field::Age => "Age must be greater than 0",
            Field::DateOfBirth => "",
            Field::Gender => "Gender is required",
            Field::Hobbies => "At least one hobby is required",
            Field::Address => "Address is required",
            Field::City => "City is required",
            Field::Pincode => "Pincode must be 6 digits",
        }
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "firstName" => Ok(Field::FirstName),
            "lastName" => Ok(Field::LastName),
            "age" => Ok(Field::Age),
            "dateOfBirth" => Ok(Field::DateOfBirth),
            "gender" => Ok(Field::Gender),
            "hobbies" => Ok(Field::Hobbies),
            "address" => Ok(Field::Address),
            "city" => Ok(Field::City),
            "pincode" => Ok(Field::Pincode),
            other => Err(format!("Unknown field: {}", other)),
        }
    }
}

/// Флаги ошибок по полям: `true` — значение не прошло проверку
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub first_name: bool,
    pub last_name: bool,
    pub age: bool,
    pub gender: bool,
    pub hobbies: bool,
    pub address: bool,
    pub city: bool,
    pub pincode: bool,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> bool {
        match field {
            Field::FirstName => self.first_name,
            Field::LastName => self.last_name,
            Field::Age => self.age,
            Field::DateOfBirth => false,
            Field::Gender => self.gender,
            Field::Hobbies => self.hobbies,
            Field::Address => self.address,
            Field::City => self.city,
            Field::Pincode => self.pincode,
        }
    }

    pub fn set(&mut self, field: Field, invalid: bool) {
        match field {
            Field::FirstName => self.first_name = invalid,
            Field::LastName => self.last_name = invalid,
            Field::Age => self.age = invalid,
            Field::DateOfBirth => {}
            Field::Gender => self.gender = invalid,
            Field::Hobbies => self.hobbies = invalid,
            Field::Address => self.address = invalid,
            Field::City => self.city = invalid,
            Field::Pincode => self.pincode = invalid,
        }
    }

    pub fn has_any(&self) -> bool {
        Field::VALIDATED.iter().any(|f| self.get(*f))
    }

    /// Поля с ошибками в порядке формы
    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::VALIDATED
            .iter()
            .copied()
            .filter(|f| self.get(*f))
            .collect()
    }

    /// Сообщение для поля, если оно помечено как ошибочное
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).then(|| field.error_message())
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.invalid_fields().iter().map(Field::name).collect();
        write!(f, "invalid fields: {}", names.join(", "))
    }
}

fn is_alphabetic_name(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
}

fn is_positive_integer(value: &str) -> bool {
    !value.is_empty()
        && value.chars().all(|c| c.is_ascii_digit())
        && value.parse::<u32>().map(|n| n > 0).unwrap_or(false)
}

fn is_pincode(value: &str) -> bool {
    value.len() == 6 && value.chars().all(|c| c.is_ascii_digit())
}

/// Проверить одно поле черновика. Возвращает `true`, если значение ошибочно.
pub fn is_field_invalid(field: Field, draft: &UserEntryDraft) -> bool {
    match field {
        Field::FirstName => !is_alphabetic_name(&draft.first_name),
        Field::LastName => !is_alphabetic_name(&draft.last_name),
        Field::Age => !is_positive_integer(&draft.age),
        Field::DateOfBirth => false,
        Field::Gender => Gender::from_code(&draft.gender).is_none(),
        Field::Hobbies => draft.hobbies.is_empty(),
        Field::Address => draft.address.is_empty(),
        Field::City => draft.city.is_empty(),
        Field::Pincode => !is_pincode(&draft.pincode),
    }
}

/// Проверить все поля черновика
pub fn validate(draft: &UserEntryDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in Field::VALIDATED {
        errors.set(field, is_field_invalid(field, draft));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Hobby;

    fn valid_draft() -> UserEntryDraft {
        UserEntryDraft {
            first_name: "Amit".into(),
            last_name: "Shah".into(),
            age: "29".into(),
            date_of_birth: None,
            gender: "Male".into(),
            hobbies: vec![Hobby::Gaming],
            address: "221B".into(),
            city: "Pune".into(),
            pincode: "411001".into(),
            stored_date_of_birth: None,
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        let errors = validate(&valid_draft());
        assert!(!errors.has_any());
        assert!(errors.invalid_fields().is_empty());
    }

    #[test]
    fn test_empty_draft_flags_every_field() {
        let errors = validate(&UserEntryDraft::default());
        assert_eq!(errors.invalid_fields(), Field::VALIDATED.to_vec());
    }

    #[test]
    fn test_names_must_be_letters_only() {
        let mut draft = valid_draft();
        for bad in ["", "Am1t", "Amit Kumar", "Zoë", "O'Neil"] {
            draft.first_name = bad.into();
            assert!(is_field_invalid(Field::FirstName, &draft), "{bad:?}");
        }
        draft.last_name = "shah".into();
        assert!(!is_field_invalid(Field::LastName, &draft));
    }

    #[test]
    fn test_age_requires_positive_integer() {
        let mut draft = valid_draft();
        for bad in ["", "0", "-3", "+5", "abc", "2.5", " 29", "99999999999"] {
            draft.age = bad.into();
            assert!(is_field_invalid(Field::Age, &draft), "{bad:?}");
        }
        draft.age = "1".into();
        assert!(!is_field_invalid(Field::Age, &draft));
    }

    #[test]
    fn test_pincode_requires_six_digits() {
        let mut draft = valid_draft();
        for bad in ["", "4110", "4110011", "41100a", "４１１００１"] {
            draft.pincode = bad.into();
            assert!(is_field_invalid(Field::Pincode, &draft), "{bad:?}");
        }
        draft.pincode = "000123".into();
        assert!(!is_field_invalid(Field::Pincode, &draft));
    }

    #[test]
    fn test_gender_must_be_known() {
        let mut draft = valid_draft();
        draft.gender = "Unknown".into();
        assert!(is_field_invalid(Field::Gender, &draft));
        draft.gender = "Others".into();
        assert!(!is_field_invalid(Field::Gender, &draft));
    }

    #[test]
    fn test_date_of_birth_is_unconstrained() {
        let draft = UserEntryDraft::default();
        assert!(!is_field_invalid(Field::DateOfBirth, &draft));
        assert_eq!(FieldErrors::default().message(Field::DateOfBirth), None);
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::VALIDATED {
            assert_eq!(field.name().parse::<Field>(), Ok(field));
        }
        assert!("nickname".parse::<Field>().is_err());
    }

    #[test]
    fn test_messages_only_for_flagged_fields() {
        let mut errors = FieldErrors::default();
        errors.set(Field::Pincode, true);
        assert_eq!(errors.message(Field::Pincode), Some("Pincode must be 6 digits"));
        assert_eq!(errors.message(Field::City), None);
        assert_eq!(errors.to_string(), "invalid fields: pincode");
    }
}
