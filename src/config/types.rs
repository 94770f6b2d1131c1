//! Settings types for config.toml

use serde::{Deserialize, Serialize};

/// Default resource API base URL
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Top-level settings loaded from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub ui: UiSettings,
}

/// Remote API settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiSettings {
    /// Base URL of the resource API
    pub base_url: String,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: 10_000,
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiSettings {
    /// Terminal event poll timeout in milliseconds (tick cadence)
    pub tick_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { tick_ms: 50 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.api.timeout_ms, 10_000);
        assert_eq!(settings.ui.tick_ms, 50);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[api]
base_url = "http://localhost:4000"
"#,
        )
        .unwrap();

        assert_eq!(settings.api.base_url, "http://localhost:4000");
        assert_eq!(settings.api.timeout_ms, 10_000);
        assert_eq!(settings.ui.tick_ms, 50);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_roundtrip() {
        let settings = Settings::default();
        let text = toml::to_string(&settings).unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }
}
