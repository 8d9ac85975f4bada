//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Session-signing placeholder used when SECRET_KEY is not set.
pub const DEV_SECRET_KEY: &str = "dev-secret-key-change-in-production";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// TCP listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Session-signing material. Unused by any route today, kept for
    /// parity with the deployment environment.
    #[serde(default = "default_secret_key")]
    pub secret_key: String,

    /// Deployment environment ("development" enables verbose error pages).
    #[serde(default)]
    pub app_env: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_port() -> u16 {
    8080
}

fn default_secret_key() -> String {
    DEV_SECRET_KEY.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> crate::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("PORT must be non-zero".to_string());
        }

        if self.secret_key.is_empty() {
            return Err("SECRET_KEY must not be empty".to_string());
        }

        Ok(())
    }

    /// Whether the app runs in development mode (verbose error reporting).
    pub fn is_development(&self) -> bool {
        self.app_env.as_deref() == Some("development")
    }

    /// Whether the placeholder secret is still in use.
    pub fn uses_placeholder_secret(&self) -> bool {
        self.secret_key == DEV_SECRET_KEY
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            secret_key: default_secret_key(),
            app_env: None,
            rust_log: default_log_level(),
        }
    }
}
