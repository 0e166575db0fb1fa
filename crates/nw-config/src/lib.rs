//! # nw-config
//!
//! Layered configuration loading for Newswatch using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`NEWSWATCH_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config` (TOML, or JSON for `.json`)
//! 3. Project-level `newswatch.toml`
//! 4. User-level `~/.config/newswatch/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `NEWSWATCH_THRESHOLDS__AUDIO_MIN_KB` -> `thresholds.audio_min_kb`,
//! `NEWSWATCH_SITE__BASE_URL` -> `site.base_url`, etc.
//!
//! Unknown keys in any source are rejected rather than ignored, so a file
//! written for another layout fails to load instead of silently running
//! with defaults.
//!
//! # Usage
//!
//! ```no_run
//! use nw_config::MonitorConfig;
//!
//! let config = MonitorConfig::load_with_dotenv(None).expect("config");
//! for target in config.targets(Some("A")) {
//!     println!("{} -> {}", target.code, target.display_name);
//! }
//! ```

mod error;
mod http;
mod language;
mod output;
mod overrides;
mod site;
mod thresholds;

pub use error::ConfigError;
pub use http::HttpConfig;
pub use language::LanguageConfig;
pub use output::OutputConfig;
pub use overrides::OverridesConfig;
pub use site::SiteConfig;
pub use thresholds::ThresholdConfig;

use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};
use nw_core::LanguageTarget;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "newswatch.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    #[serde(default)]
    pub languages: Vec<LanguageConfig>,
    #[serde(default)]
    pub overrides: OverridesConfig,
}

impl MonitorConfig {
    /// Load and validate configuration from all sources.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `explicit` does not exist, a source cannot
    /// be parsed, or the merged values fail validation.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
        }
        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit file
        if let Some(path) = explicit {
            let is_json = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            figment = if is_json {
                figment.merge(Json::file(path))
            } else {
                figment.merge(Toml::file(path))
            };
        }

        // Layer 4: Environment variables (highest priority). `NEWSWATCH_LOG`
        // is the log filter, not a config key.
        figment.merge(Env::prefixed("NEWSWATCH_").ignore(&["log"]).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("newswatch").join("config.toml"))
    }

    /// Check values that would otherwise surface as confusing run failures.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.site.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: String::from("site.base_url"),
                reason: format!("expected an http(s) origin, got '{base}'"),
            });
        }

        if self.output.delimiter.chars().count() != 1 {
            return Err(ConfigError::InvalidValue {
                field: String::from("output.delimiter"),
                reason: format!(
                    "expected a single character, got '{}'",
                    self.output.delimiter
                ),
            });
        }

        if let Some(index) = self
            .languages
            .iter()
            .position(|lang| lang.code.trim().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: format!("languages[{index}].code"),
                reason: String::from("must not be empty"),
            });
        }

        Ok(())
    }

    /// Resolve configured languages into targets, optionally keeping only
    /// those tagged with `batch`.
    #[must_use]
    pub fn targets(&self, batch: Option<&str>) -> Vec<LanguageTarget> {
        self.languages
            .iter()
            .filter(|lang| batch.is_none_or(|batch| lang.in_batch(batch)))
            .map(|lang| lang.to_target(&self.site.default_section_id, self.thresholds))
            .collect()
    }
}
