use serde::{Deserialize, Serialize};

/// Пол пользователя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Others,
}

impl Gender {
    /// Получить код (он же значение в JSON и в `<select>`)
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Others => "Others",
        }
    }

    /// Получить все варианты в порядке отображения
    pub fn all() -> [Gender; 3] {
        [Gender::Male, Gender::Female, Gender::Others]
    }

    /// Парсинг из строки; регистр учитывается
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            "Others" => Some(Gender::Others),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert_eq!(Gender::from_code("Others"), Some(Gender::Others));
        assert_eq!(Gender::from_code("male"), None);
        assert_eq!(Gender::from_code(""), None);
    }

    #[test]
    fn test_json_uses_code() {
        let json = serde_json::to_string(&Gender::Female).unwrap();
        assert_eq!(json, "\"Female\"");
    }
}
