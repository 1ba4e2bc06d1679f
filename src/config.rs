//! Configuration module for Letterbox.

use serde::Deserialize;
use std::path::Path;

use crate::{LetterboxError, Result};

/// Web server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins. Empty means permissive development mode.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: vec![],
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/letterbox.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Outbound mail configuration.
///
/// Both fields must be set for the dispatch endpoint to operate; the
/// intake endpoint works without them.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MailConfig {
    /// Resend API key.
    #[serde(default)]
    pub api_key: String,
    /// From-address for outbound letters.
    #[serde(default)]
    pub from_email: String,
}

impl MailConfig {
    /// Whether both credentials required for sending are present.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.from_email.is_empty()
    }
}

/// Dispatch job configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DispatchConfig {
    /// Maximum number of due letters processed per invocation.
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,
}

fn default_batch_size() -> u32 {
    crate::dispatch::DEFAULT_BATCH_SIZE
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file. Empty disables file logging.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/letterbox.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Web server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Outbound mail configuration.
    #[serde(default)]
    pub mail: MailConfig,
    /// Dispatch job configuration.
    #[serde(default)]
    pub dispatch: DispatchConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(LetterboxError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s)
            .map_err(|e| LetterboxError::Validation(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `LETTERBOX_RESEND_API_KEY`: Override the Resend API key
    /// - `LETTERBOX_FROM_EMAIL`: Override the from-address
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var("LETTERBOX_RESEND_API_KEY") {
            if !api_key.is_empty() {
                self.mail.api_key = api_key;
            }
        }
        if let Ok(from_email) = std::env::var("LETTERBOX_FROM_EMAIL") {
            if !from_email.is_empty() {
                self.mail.from_email = from_email;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - The dispatch batch size is zero
    /// - Only one of the two mail credentials is set
    pub fn validate(&self) -> Result<()> {
        if self.dispatch.batch_size == 0 {
            return Err(LetterboxError::Validation(
                "dispatch batch_size must be at least 1".to_string(),
            ));
        }
        if !self.mail.is_configured()
            && (!self.mail.api_key.is_empty() || !self.mail.from_email.is_empty())
        {
            return Err(LetterboxError::Validation(
                "mail configuration is incomplete: both api_key and from_email are required. \
                 Set them in config.toml or via LETTERBOX_RESEND_API_KEY / LETTERBOX_FROM_EMAIL."
                    .to_string(),
            ));
        }
        Ok(())
    }
}
