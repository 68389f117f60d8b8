use contracts::shared::config::{load_config, AppConfig};
use web_sys::window;

/// `<script type="application/toml" id="app-config">` in index.html overrides the defaults.
const CONFIG_ELEMENT_ID: &str = "app-config";

fn config_override() -> Option<String> {
    window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty())
}

/// Load the app configuration, falling back to built-in defaults.
pub fn load_app_config() -> AppConfig {
    match load_config(config_override().as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration, using defaults: {}", e);
            AppConfig::default()
        }
    }
}
