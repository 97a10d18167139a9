//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `APP_ROOT` - Installation root directory (default: current directory).
//!   Must contain the `app/` tree (`controllers/`, `models/`, `views/`).
//! - `BASE_URI` - URL prefix the application is mounted under and that
//!   generated URLs carry (default: `/ilya-cms/`). Must start and end
//!   with `/`.
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Installation root; [`crate::paths::AppPaths`] derives everything
    /// else from it.
    pub app_root: String,
    /// URL prefix for mounting and URL generation, e.g. `/ilya-cms/`.
    pub base_uri: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default; loading itself cannot fail. Call
    /// [`Config::validate`] before using the values.
    pub fn from_env() -> Self {
        let app_root = env::var("APP_ROOT").unwrap_or_else(|_| ".".to_string());
        let base_uri = env::var("BASE_URI").unwrap_or_else(|_| "/ilya-cms/".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            app_root,
            base_uri,
            listen_addr,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_uri` does not start and end with `/`
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is missing a port separator
    pub fn validate(&self) -> Result<()> {
        if !self.base_uri.starts_with('/') || !self.base_uri.ends_with('/') {
            anyhow::bail!(
                "BASE_URI must start and end with '/', got '{}'",
                self.base_uri
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.app_root.is_empty() {
            anyhow::bail!("APP_ROOT must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  App root: {}", self.app_root);
        tracing::info!("  Base URI: {}", self.base_uri);
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
