use serde::{Deserialize, Serialize};

/// Способ отображения списка пользователей
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListLayout {
    /// Сетка карточек
    #[default]
    Cards,
    /// Таблица
    Table,
}

impl ListLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListLayout::Cards => "cards",
            ListLayout::Table => "table",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "cards" => Some(ListLayout::Cards),
            "table" => Some(ListLayout::Table),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ListLayout::Cards => "Cards",
            ListLayout::Table => "Table",
        }
    }

    pub fn all() -> [ListLayout; 2] {
        [ListLayout::Cards, ListLayout::Table]
    }

    /// Подпись кнопки отправки: (создание, редактирование)
    pub fn submit_labels(&self) -> (&'static str, &'static str) {
        match self {
            ListLayout::Cards => ("Submit", "Save"),
            ListLayout::Table => ("Register", "Update"),
        }
    }

    pub fn list_title(&self) -> &'static str {
        match self {
            ListLayout::Cards => "👥 User Entries",
            ListLayout::Table => "Users List",
        }
    }

    pub fn empty_text(&self) -> &'static str {
        match self {
            ListLayout::Cards => "No entries found",
            ListLayout::Table => "No users found",
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    /// Ключ, под которым хранится JSON-массив пользователей
    pub records_key: String,
    /// Ключ сохранённого вида списка
    pub layout_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            records_key: "usersData".to_string(),
            layout_key: "registration-layout".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct UiConfig {
    #[serde(default)]
    pub default_layout: ListLayout,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[storage]
records_key = "usersData"
layout_key = "registration-layout"

[ui]
default_layout = "cards"
"#;

/// Parse configuration from TOML text
pub fn parse_config(contents: &str) -> anyhow::Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents)?;
    if config.storage.records_key.trim().is_empty() {
        anyhow::bail!("storage.records_key must not be empty");
    }
    Ok(config)
}

/// Load configuration
///
/// Search order:
/// 1. Override text supplied by the host page
/// 2. Falls back to embedded default config
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<AppConfig> {
    if let Some(contents) = override_toml {
        match parse_config(contents) {
            Ok(config) => return Ok(config),
            Err(e) => log::warn!("Ignoring invalid configuration override: {}", e),
        }
    }

    parse_config(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.storage.records_key, "usersData");
        assert_eq!(config.storage.layout_key, "registration-layout");
        assert_eq!(config.ui.default_layout, ListLayout::Cards);
    }

    #[test]
    fn test_default_impl_matches_embedded_config() {
        assert_eq!(AppConfig::default(), parse_config(DEFAULT_CONFIG).unwrap());
    }

    #[test]
    fn test_override_wins() {
        let config = load_config(Some(
            r#"
[storage]
records_key = "people"
layout_key = "people-layout"

[ui]
default_layout = "table"
"#,
        ))
        .unwrap();
        assert_eq!(config.storage.records_key, "people");
        assert_eq!(config.ui.default_layout, ListLayout::Table);
    }

    #[test]
    fn test_missing_ui_section_uses_defaults() {
        let config = parse_config(
            r#"
[storage]
records_key = "people"
layout_key = "layout"
"#,
        )
        .unwrap();
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_invalid_override_falls_back() {
        let config = load_config(Some("[storage]\nrecords_key = \"\"\nlayout_key = \"x\"")).unwrap();
        assert_eq!(config.storage.records_key, "usersData");

        let config = load_config(Some("not toml at all [")).unwrap();
        assert_eq!(config, parse_config(DEFAULT_CONFIG).unwrap());
    }

    #[test]
    fn test_layout_labels() {
        assert_eq!(ListLayout::Cards.submit_labels(), ("Submit", "Save"));
        assert_eq!(ListLayout::Table.submit_labels(), ("Register", "Update"));
        assert_eq!(ListLayout::from_str("table"), Some(ListLayout::Table));
        assert_eq!(ListLayout::from_str("grid"), None);
    }
}
