//! Configuration management for bizcard.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "bizcard";

/// Page address used when none is configured.
pub const DEFAULT_PAGE_URL: &str = "http://localhost:8080/";

/// Default QR image edge length in pixels.
pub const DEFAULT_QR_SIZE: u32 = 180;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `BIZCARD_`)
/// 2. TOML config file at `~/.config/bizcard/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page configuration.
    pub page: PageConfig,
    /// Profile data source.
    pub profile: ProfileConfig,
    /// Share configuration.
    pub share: ShareConfig,
    /// QR code configuration.
    pub qr: QrConfig,
    /// Export configuration.
    pub output: OutputConfig,
}

/// Page-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Public address of the card page. Shared, copied, and encoded in the QR code.
    pub url: String,
}

/// Profile data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Path to the profile JSON file.
    /// Defaults to the profile bundled into the binary.
    pub path: Option<PathBuf>,
}

/// Share-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// External command used as the native share action, program first.
    /// Empty means no native share is available and the clipboard is used.
    pub command: Vec<String>,
}

/// QR code configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrConfig {
    /// Minimum edge length of the rendered image in pixels.
    pub size: u32,
}

/// Export configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the static pages are written to.
    pub dir: PathBuf,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PAGE_URL.to_string(),
        }
    }
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_QR_SIZE,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("site"),
        }
    }
}

impl Config {
    /// Load configuration, reading `config_path` or the default config file.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("BIZCARD_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.page.url.trim().is_empty() {
            return Err(Error::config_validation("page.url must not be empty"));
        }

        if self.qr.size == 0 {
            return Err(Error::config_validation("qr.size must be greater than 0"));
        }

        if let Some(program) = self.share.command.first() {
            if program.trim().is_empty() {
                return Err(Error::config_validation(
                    "share.command program must not be empty",
                ));
            }
        }

        Ok(())
    }

    /// Return a copy with the page address replaced.
    #[must_use]
    pub fn with_page_url(mut self, url: impl Into<String>) -> Self {
        self.page.url = url.into();
        self
    }

    /// Whether a native share command is configured.
    #[must_use]
    pub fn has_share_command(&self) -> bool {
        !self.share.command.is_empty()
    }
}
