//! Application configuration
//!
//! Supports multiple profiles (dev, release) with different settings, layered
//! from config files and `HEALTHGATE_`-prefixed environment variables.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::gate::DeploymentMode;

/// Environment variable holding the gate's expected username
pub const ENV_USERNAME: &str = "HEALTHGATE_USERNAME";

/// Environment variable holding the gate's expected password
pub const ENV_PASSWORD: &str = "HEALTHGATE_PASSWORD";

/// Configuration loading failure
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to load configuration")]
    Source(#[from] config::ConfigError),
    #[error("error_code {0} is not a valid HTTP error status (expected 400-599)")]
    InvalidErrorCode(u16),
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// The active profile (dev, release, etc.)
    pub profile: String,
    /// Deployment mode consumed by the access gate
    pub mode: DeploymentMode,
    /// Emit a warning log record when a run produced warnings
    pub log_on_warning: bool,
    /// Emit an alert log record when a run produced errors
    pub log_on_error: bool,
    /// HTTP status returned when a suite is not fully OK
    pub error_code: u16,
    /// Path a redirected caller is sent to for session login
    pub login_path: String,
}

impl AppConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Settings are layered in the following order:
    /// 1. Built-in defaults (live mode, logging off, error code 500)
    /// 2. config/default.toml (base configuration)
    /// 3. config/{profile}.toml (profile-specific overrides)
    /// 4. Environment variables with prefix HEALTHGATE_
    ///    (e.g., HEALTHGATE_LOG_ON_ERROR=true)
    pub fn load(profile: &str) -> Result<Self, ConfigLoadError> {
        let config = Config::builder()
            .set_default("mode", "live")?
            .set_default("log_on_warning", false)?
            .set_default("log_on_error", false)?
            .set_default("error_code", 500)?
            .set_default("login_path", "/login")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", profile)).required(false))
            .add_source(
                Environment::with_prefix("HEALTHGATE")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override("profile", profile)?
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()
    }

    /// Loads configuration using the HEALTHGATE_PROFILE environment variable,
    /// defaulting to "release" if not set
    pub fn load_from_env() -> Result<Self, ConfigLoadError> {
        let profile =
            std::env::var("HEALTHGATE_PROFILE").unwrap_or_else(|_| "release".to_string());
        Self::load(&profile)
    }

    fn validate(self) -> Result<Self, ConfigLoadError> {
        if !(400..=599).contains(&self.error_code) {
            return Err(ConfigLoadError::InvalidErrorCode(self.error_code));
        }
        Ok(self)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: "release".to_string(),
            mode: DeploymentMode::Live,
            log_on_warning: false,
            log_on_error: false,
            error_code: 500,
            login_path: "/login".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_opt_in() {
        let config = AppConfig::default();
        assert!(!config.log_on_warning);
        assert!(!config.log_on_error);
        assert_eq!(config.error_code, 500);
        assert_eq!(config.mode, DeploymentMode::Live);
    }

    #[test]
    fn error_code_outside_error_range_is_rejected() {
        let config = AppConfig {
            error_code: 200,
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigLoadError::InvalidErrorCode(200))
        ));
    }
}
