//! Settings loader for `config.toml`

use std::path::{Path, PathBuf};

use url::Url;
use vastu_core::prelude::*;

use super::types::{BackendSettings, Settings};

/// Directory under the platform config dir
pub const CONFIG_DIR_NAME: &str = "vastu-desk";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_CONFIG_CONTENT: &str = r#"# Vastu Desk Configuration

[backend]
# JSON-RPC endpoint of the consultation service (ws:// or wss://)
url = "ws://127.0.0.1:4943/rpc"

[ui]
brand = "Ankit's Numerology"
consultant = "Ankit"

[behavior]
# Ask before quitting while a report or booking is in flight
confirm_quit = true
"#;

/// `<config_dir>/vastu-desk/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`.
///
/// A missing file gives defaults. Unreadable or unparseable files are logged
/// and also give defaults. An invalid backend URL falls back to the default
/// endpoint.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    let mut settings: Settings = match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                return Settings::default();
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            return Settings::default();
        }
    };

    if let Err(e) = validate_backend_url(&settings.backend.url) {
        warn!("Ignoring backend url in {:?}: {}", config_path, e);
        settings.backend = BackendSettings::default();
    }

    settings
}

/// Check that `raw` is a `ws://` or `wss://` URL.
pub fn validate_backend_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| Error::config_invalid(format!("invalid backend url '{}': {}", raw, e)))?;

    match url.scheme() {
        "ws" | "wss" => Ok(url),
        other => Err(Error::config_invalid(format!(
            "backend url must use ws:// or wss://, got {}://",
            other
        ))),
    }
}

impl Settings {
    /// Replace the backend URL with a command-line override after validating it.
    pub fn with_backend_override(mut self, url: Option<&str>) -> Result<Self> {
        if let Some(url) = url {
            validate_backend_url(url)?;
            self.backend.url = url.to_string();
        }
        Ok(self)
    }
}

/// Write the default config file when none exists.
///
/// Returns `true` if a file was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG_CONTENT)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;
    info!("Created default config at {:?}", config_path);
    Ok(true)
}
