//! Settings for the Diligence GUI
//!
//! Defaulted, serde-backed settings with an optional JSON override file read
//! from the working directory.

use crate::theme::Theme;
use serde::Deserialize;

/// Name of the optional settings file in the working directory
pub const SETTINGS_FILE: &str = "diligence.json";

/// API connection configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConnectionSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Default for ApiConnectionSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Top-level application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub api: ApiConnectionSettings,
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api: ApiConnectionSettings::default(),
            theme: default_theme(),
        }
    }
}

impl AppSettings {
    /// Load settings from the working directory, falling back to defaults.
    ///
    /// A missing file is normal; a malformed one is reported and ignored.
    pub fn load() -> Self {
        match std::fs::read_to_string(SETTINGS_FILE) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("ignoring malformed {}: {}", SETTINGS_FILE, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Resolve the configured theme variant; unknown names fall back to dark.
    pub fn resolve_theme(&self) -> Theme {
        match self.theme.as_str() {
            "light" => Theme::light(),
            _ => Theme::dark(),
        }
    }
}
