use serde::{Deserialize, Serialize};

/// Увлечения, доступные в форме регистрации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hobby {
    Swimming,
    Gymming,
    Gaming,
}

impl Hobby {
    pub fn code(&self) -> &'static str {
        match self {
            Hobby::Swimming => "Swimming",
            Hobby::Gymming => "Gymming",
            Hobby::Gaming => "Gaming",
        }
    }

    /// Все увлечения в порядке отображения чекбоксов
    pub fn all() -> [Hobby; 3] {
        [Hobby::Swimming, Hobby::Gymming, Hobby::Gaming]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Swimming" => Some(Hobby::Swimming),
            "Gymming" => Some(Hobby::Gymming),
            "Gaming" => Some(Hobby::Gaming),
            _ => None,
        }
    }

    /// Список через запятую, как в карточке и таблице
    pub fn join(hobbies: &[Hobby]) -> String {
        hobbies
            .iter()
            .map(Hobby::code)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Hobby {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join() {
        assert_eq!(Hobby::join(&[]), "");
        assert_eq!(Hobby::join(&[Hobby::Gaming, Hobby::Swimming]), "Gaming, Swimming");
    }

    #[test]
    fn test_from_code_rejects_unknown() {
        assert_eq!(Hobby::from_code("Gymming"), Some(Hobby::Gymming));
        assert_eq!(Hobby::from_code("Chess"), None);
    }
}
