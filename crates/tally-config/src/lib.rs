//! # tally-config
//!
//! Layered configuration loading for Tally using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TALLY_*` prefix, `__` as separator)
//! 2. Project-level `.tally/config.toml`
//! 3. User-level `~/.config/tally/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TALLY_GEMINI__API_KEY` -> `gemini.api_key`,
//! `TALLY_CATALOG__PATH` -> `catalog.path`, etc. The `__` (double underscore)
//! separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use tally_config::TallyConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = TallyConfig::load_with_dotenv().expect("config");
//!
//! if config.gemini.is_configured() {
//!     println!("Gemini model: {}", config.gemini.model);
//! }
//! ```

mod catalog;
mod directory;
mod error;
mod gemini;
mod general;

pub use catalog::CatalogConfig;
pub use directory::{DirectoryConfig, UserEntry};
pub use error::ConfigError;
pub use gemini::GeminiConfig;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TallyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

impl TallyConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".tally/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TALLY_").split("__"))
    }

    /// Reject values that extract cleanly but cannot work.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gemini.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "gemini.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }

        for (index, user) in self.directory.users.iter().enumerate() {
            if user.username.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("directory.users[{index}].username"),
                    reason: "must not be blank".into(),
                });
            }
        }

        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tally").join("config.toml"))
    }

    /// Load `.env` from the current directory. Silently does nothing if no
    /// `.env` is found.
    fn load_dotenv() {
        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = TallyConfig::default();
        assert!(!config.gemini.is_configured());
        assert!(!config.catalog.is_custom());
        assert!(!config.directory.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config = TallyConfig::from_figment(&TallyConfig::figment())
                .expect("should extract defaults");
            assert!(!config.gemini.is_configured());
            assert_eq!(config.gemini.timeout_secs, 30);
            Ok(())
        });
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = TallyConfig::default();
        config.gemini.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("gemini.timeout_secs"));
    }

    #[test]
    fn blank_username_is_rejected() {
        let mut config = TallyConfig::default();
        config.directory.users.push(UserEntry {
            name: "Ghost".into(),
            username: "  ".into(),
            password: "x".into(),
        });
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
