//! Top-level application configuration.
//!
//! Configuration is stored as YAML in the user configuration directory
//! (`confab/config.yaml`). The `CONFAB_CONFIG` environment variable
//! overrides the full path, which is also how tests point the loader at a
//! temporary file.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{ConfabError, Result};
use crate::i18n::Locale;

/// Environment variable overriding the config file path
pub const CONFIG_ENV: &str = "CONFAB_CONFIG";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Display name for the local user
    #[serde(default = "default_display_name")]
    pub display_name: String,

    /// UI locale tag (primary language subtag, case-insensitive)
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Channel opened when `confab chat` is run without an argument
    #[serde(default = "default_channel")]
    pub default_channel: String,

    /// Whether the channel header shows the avatar action
    #[serde(default = "default_show_avatars")]
    pub show_avatars: bool,
}

fn default_display_name() -> String {
    "guest".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

fn default_channel() -> String {
    "general".to_string()
}

fn default_show_avatars() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_name: default_display_name(),
            locale: default_locale(),
            default_channel: default_channel(),
            show_avatars: default_show_avatars(),
        }
    }
}

impl Config {
    /// Resolve the config file path
    pub fn path() -> Result<PathBuf> {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", "confab")
            .ok_or_else(|| ConfabError::Config("cannot determine config directory".to_string()))?;
        Ok(dirs.config_dir().join("config.yaml"))
    }

    /// Load the configuration, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(serde_yaml_ng::from_str(&content)?)
    }

    /// Write the configuration back to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_yaml_ng::to_string(self)?)?;
        Ok(())
    }

    /// The configured locale, validated
    pub fn locale(&self) -> Result<Locale> {
        Locale::parse(&self.locale)
    }

    /// Set a configuration value by key, validating where applicable
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "display_name" => {
                if value.trim().is_empty() {
                    return Err(ConfabError::Config(
                        "display_name must not be empty".to_string(),
                    ));
                }
                self.display_name = value.trim().to_string();
            }
            "locale" => {
                let locale = Locale::parse(value)?;
                self.locale = locale.tag().to_string();
            }
            "default_channel" => {
                self.default_channel = value.to_string();
            }
            "show_avatars" => {
                self.show_avatars = value.parse().map_err(|_| {
                    ConfabError::Config(format!("show_avatars must be true or false, got '{}'", value))
                })?;
            }
            _ => {
                return Err(ConfabError::Config(format!("unknown key '{}'", key)));
            }
        }
        Ok(())
    }
}
