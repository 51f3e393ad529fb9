//! Server settings loaded from TOML with environment overrides

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Settings loading error
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Interface the server binds to.
    pub host: String,
    /// Port the server listens on.
    pub port: u16,
    /// Directory scanned for `*.json` player templates at startup.
    pub template_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            host: "0.0.0.0".to_string(),
            port: 3000,
            template_dir: PathBuf::from("templates"),
        }
    }
}

impl Settings {
    /// Load settings from the given TOML file, falling back to defaults
    /// when the file does not exist, then apply `HP_SERVER_HOST`,
    /// `HP_SERVER_PORT`, and `HP_TEMPLATE_DIR` environment overrides.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let mut settings = if path.exists() {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else {
            Settings::default()
        };

        if let Ok(host) = std::env::var("HP_SERVER_HOST") {
            settings.host = host;
        }
        if let Ok(port) = std::env::var("HP_SERVER_PORT") {
            if let Ok(port) = port.parse() {
                settings.port = port;
            }
        }
        if let Ok(dir) = std::env::var("HP_TEMPLATE_DIR") {
            settings.template_dir = PathBuf::from(dir);
        }

        Ok(settings)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
