//! Backoffice configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BACKOFFICE_DATA_DIR` - Directory holding the persisted keys (default: `.backoffice`)
//! - `BACKOFFICE_SYSTEM_THEME` - System colour scheme, `light` or `dark` (default: light)
//! - `BACKOFFICE_LOG_JSON` - Emit JSON logs when set to anything but `0`/`false`
//! - `BACKOFFICE_INSTANT` - Skip simulated latency when set to `1`/`true`

use std::path::PathBuf;

use thiserror::Error;

use backoffice_core::ColorMode;

use crate::runtime::Latency;

const DEFAULT_DATA_DIR: &str = ".backoffice";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Backoffice application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackofficeConfig {
    /// Directory for the file-backed store
    pub data_dir: PathBuf,
    /// Colour scheme reported by the host system
    pub system_theme: ColorMode,
    /// Emit structured JSON logs instead of text
    pub log_json: bool,
    /// Whether repository calls wait out their simulated round-trip
    pub latency: Latency,
}

impl Default for BackofficeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            system_theme: ColorMode::Light,
            log_json: false,
            latency: Latency::Simulated,
        }
    }
}

impl BackofficeConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set to a value
    /// that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("BACKOFFICE_DATA_DIR", DEFAULT_DATA_DIR));
        let system_theme = get_optional_env("BACKOFFICE_SYSTEM_THEME")
            .map(|raw| {
                raw.parse::<ColorMode>().map_err(|e| {
                    ConfigError::InvalidEnvVar("BACKOFFICE_SYSTEM_THEME".to_string(), e)
                })
            })
            .transpose()?
            .unwrap_or(ColorMode::Light);
        let log_json = get_optional_env("BACKOFFICE_LOG_JSON")
            .is_some_and(|raw| parse_flag(&raw));
        let latency = if get_optional_env("BACKOFFICE_INSTANT").is_some_and(|raw| parse_flag(&raw))
        {
            Latency::Instant
        } else {
            Latency::Simulated
        };

        Ok(Self {
            data_dir,
            system_theme,
            log_json,
            latency,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable, treating empty as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Interpret a flag value. Anything except `0`, `false`, `no` and `off` is on.
fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
