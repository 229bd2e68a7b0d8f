//! # mesh-config
//!
//! Layered configuration loading for mesh using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MESH_*` prefix, `__` as separator)
//! 2. Project-level `.mesh/config.toml`
//! 3. User-level `~/.config/mesh/config.toml`
//! 4. Built-in defaults
//!
//! Every failure surfaces as a [`mesh_core::ConfigError`]. When the offending
//! value came from a TOML file, the error message names that file.
//!
//! # Usage
//!
//! ```no_run
//! use mesh_config::MeshConfig;
//!
//! let config = MeshConfig::load_with_dotenv().expect("config");
//! println!("audit level: {}", config.audits.level);
//! ```

mod api;
mod audits;
mod general;

pub use api::ApiConfig;
pub use audits::AuditsConfig;
pub use general::GeneralConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use mesh_core::{AuditFailure, ConfigError, ConfigErrorKind, raise_config_error};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MeshConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub audits: AuditsConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

impl MeshConfig {
    /// Load and validate configuration from all sources (TOML files +
    /// environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate a configuration from an existing figment.
    ///
    /// Validation errors point at the file that supplied the offending key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction or validation fails.
    pub fn load_from(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract().map_err(from_figment)?;
        config.validate_with(|key| source_file(figment, key))?;
        Ok(config)
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "merging user config");
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".mesh/config.toml");
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "merging project config");
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("MESH_").split("__"))
    }

    /// Check cross-field constraints without source locations.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_with(|_| None)
    }

    /// Check cross-field constraints, using `locate` to find the file a key
    /// was read from.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint as a [`ConfigError`]. Violations
    /// in the `[audits]` section use [`ConfigErrorKind::Audit`].
    pub fn validate_with<F>(&self, locate: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<PathBuf>,
    {
        if self.api.timeout_secs == 0 {
            return raise_config_error(
                "api.timeout_secs must be greater than 0",
                locate("api.timeout_secs"),
                ConfigErrorKind::General,
            );
        }

        if self.api.is_configured()
            && !(self.api.base_url.starts_with("http://")
                || self.api.base_url.starts_with("https://"))
        {
            return raise_config_error(
                format!(
                    "api.base_url must start with http:// or https://, got '{}'",
                    self.api.base_url
                ),
                locate("api.base_url"),
                ConfigErrorKind::General,
            );
        }

        if self.audits.blocking_level < self.audits.level {
            return raise_config_error(
                format!(
                    "audits.blocking_level ({}) must not be less severe than audits.level ({})",
                    self.audits.blocking_level, self.audits.level
                ),
                locate("audits.blocking_level"),
                ConfigErrorKind::Audit,
            );
        }

        Ok(())
    }

    /// Render a failed audit's query in the configured dialect.
    #[must_use]
    pub fn render_audit(&self, audit: &AuditFailure) -> String {
        audit.sql(self.general.dialect())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mesh").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) looking for a `.env`
    /// file, then falls back to the current directory.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

/// File that supplied `key`, if it came from a file.
fn source_file(figment: &Figment, key: &str) -> Option<PathBuf> {
    figment
        .find_metadata(key)
        .and_then(|metadata| metadata.source.as_ref())
        .and_then(figment::Source::file_path)
        .map(Path::to_path_buf)
}

fn from_figment(error: figment::Error) -> ConfigError {
    let message = if error.path.is_empty() {
        error.kind.to_string()
    } else {
        format!("{} for key '{}'", error.kind, error.path.join("."))
    };
    let location = error
        .metadata
        .as_ref()
        .and_then(|metadata| metadata.source.as_ref())
        .and_then(figment::Source::file_path);
    ConfigError::located(ConfigErrorKind::General, message, location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_core::ErrorLevel;

    #[test]
    fn default_config_is_valid() {
        let config = MeshConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.api.is_configured());
        assert_eq!(config.audits.level, ErrorLevel::Warn);
        assert_eq!(config.general.dialect(), None);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = MeshConfig::figment();
        let config: MeshConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.audits.blocking_level, ErrorLevel::Raise);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = MeshConfig::default();
        config.api.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "api.timeout_secs must be greater than 0");
        assert!(!err.is_audit());
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let mut config = MeshConfig::default();
        config.api.base_url = "ftp://mesh.example.com".into();
        let err = config
            .validate_with(|_| Some(PathBuf::from(".mesh/config.toml")))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "api.base_url must start with http:// or https://, got 'ftp://mesh.example.com' at '.mesh/config.toml'"
        );
    }

    #[test]
    fn blocking_level_below_level_is_an_audit_config_error() {
        let mut config = MeshConfig::default();
        config.audits.level = ErrorLevel::Raise;
        config.audits.blocking_level = ErrorLevel::Warn;
        let err = config.validate().unwrap_err();
        assert!(err.is_audit());
        assert_eq!(
            err.to_string(),
            "audits.blocking_level (warn) must not be less severe than audits.level (raise)"
        );
    }
}
