use crate::config::auth::AuthConfig;
use config::{Config as ConfigCrate, ConfigError};
use serde::Deserialize;

pub mod auth;

/// Main configuration structure for the task server
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// The port the server will listen to (default: 7700)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Credential verification configuration
    #[serde(default)]
    pub auth: AuthConfig,
}

fn default_port() -> u16 {
    7700
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: default_port(),
            auth: AuthConfig::default(),
        }
    }
}

impl Settings {
    /// Creates a new Settings instance from environment variables
    pub fn new() -> Result<Self, String> {
        let settings: Settings = ConfigCrate::builder()
            .add_source(
                config::Environment::with_prefix("TASKS")
                    .prefix_separator("_")
                    .separator("_")
                    .convert_case(config::Case::Snake),
            )
            .build()
            .map_err(|e: ConfigError| e.to_string())?
            .try_deserialize()
            .map_err(|e: ConfigError| e.to_string())?;

        if settings.auth.secret.is_empty() {
            return Err("TASKS_AUTH_SECRET must be set to a non-empty signing secret".to_string());
        }

        Ok(settings)
    }

    #[cfg(test)]
    pub fn for_test() -> Self {
        Self {
            port: 0, // Let the OS choose a port
            auth: AuthConfig {
                secret: "test-signing-secret".to_string(),
                leeway: 0,
            },
        }
    }
}
