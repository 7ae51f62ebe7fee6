mod defaults;

#[cfg(test)]
mod tests;

use lodge_i18n::{resolve_language, DirectionRules, SupportedLanguage};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

use crate::error::LodgeError;
use defaults::*;

/// Top-level Lodge configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub lodge: LodgeConfig,
    #[serde(default)]
    pub locale: LocaleConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LodgeConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for LodgeConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
        }
    }
}

/// Locale settings -- how a language is chosen and which ones flip the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Hint used when neither `--lang` nor `LODGE_LANG` is given.
    #[serde(default = "default_hint")]
    pub default_hint: String,
    /// Primary subtags rendered right to left on desktop.
    #[serde(default = "default_rtl_languages")]
    pub rtl_languages: Vec<String>,
    /// Viewport width (px) below which the layout is mobile.
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: u32,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_hint: default_hint(),
            rtl_languages: default_rtl_languages(),
            mobile_breakpoint: default_mobile_breakpoint(),
        }
    }
}

impl LocaleConfig {
    /// Language the configured default hint resolves to.
    pub fn default_language(&self) -> SupportedLanguage {
        resolve_language(Some(self.default_hint.as_str()))
    }

    pub fn direction_rules(&self) -> DirectionRules {
        DirectionRules {
            rtl_languages: self
                .rtl_languages
                .iter()
                .map(|code| code.trim().to_ascii_lowercase())
                .collect(),
            mobile_breakpoint: self.mobile_breakpoint,
        }
    }
}

/// Content store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON export of the content tables.
    #[serde(default = "default_store_path")]
    pub path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl StoreConfig {
    /// Store path with `~` expanded.
    pub fn resolved_path(&self) -> String {
        shellexpand(&self.path)
    }
}

impl Config {
    /// Check values that parse but cannot work.
    ///
    /// A default hint that is not itself a supported code only warns, since
    /// resolution never fails; a zero breakpoint is rejected.
    pub fn validate(&self) -> Result<(), LodgeError> {
        if self.locale.mobile_breakpoint == 0 {
            return Err(LodgeError::Config(
                "locale.mobile_breakpoint must be greater than 0".to_string(),
            ));
        }
        if SupportedLanguage::from_code(&self.locale.default_hint).is_none() {
            warn!(
                "locale.default_hint '{}' is not a supported code, resolves to '{}'",
                self.locale.default_hint,
                self.locale.default_language()
            );
        }
        if self.store.path.trim().is_empty() {
            return Err(LodgeError::Config("store.path is empty".to_string()));
        }
        Ok(())
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, LodgeError> {
    let path = Path::new(path);
    if !path.exists() {
        info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| LodgeError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| LodgeError::Config(format!("failed to parse config: {}", e)))?;

    config.validate()?;
    Ok(config)
}
