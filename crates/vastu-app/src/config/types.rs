//! Configuration types for Vastu Desk
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `BackendSettings`, `UiSettings`, `BehaviorSettings` - Its sections

use serde::{Deserialize, Serialize};

/// Default consultation service endpoint.
pub const DEFAULT_BACKEND_URL: &str = "ws://127.0.0.1:4943/rpc";

/// Global settings from `config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Remote service settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendSettings {
    /// WebSocket URL of the JSON-RPC endpoint
    #[serde(default = "default_backend_url")]
    pub url: String,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
        }
    }
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

/// Branding shown in the header and landing view
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Name used in the landing copy
    #[serde(default = "default_consultant")]
    pub consultant: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            consultant: default_consultant(),
        }
    }
}

fn default_brand() -> String {
    "Ankit's Numerology".to_string()
}

fn default_consultant() -> String {
    "Ankit".to_string()
}

/// Behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before quitting while remote calls are in flight
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self { confirm_quit: true }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.backend.url, "ws://127.0.0.1:4943/rpc");
        assert_eq!(settings.ui.brand, "Ankit's Numerology");
        assert_eq!(settings.ui.consultant, "Ankit");
        assert!(settings.behavior.confirm_quit);
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[ui]
brand = "Desk"

[behavior]
"#,
        )
        .unwrap();

        assert_eq!(settings.ui.brand, "Desk");
        assert_eq!(settings.ui.consultant, "Ankit");
        assert!(settings.behavior.confirm_quit);
        assert_eq!(settings.backend.url, DEFAULT_BACKEND_URL);
    }
}
