//! Shared service configuration.
//!
//! Settings come from an optional `configuration` file in the working
//! directory plus `APP__`-prefixed environment variables (`APP__PORT`),
//! with a `.env` file loaded first. Service-specific settings such as the
//! completion API credentials layer on top of this in the service's own
//! config module.

use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Settings every service in the workspace shares.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// HTTP listen port. Port 0 asks the OS for a free port, which the
    /// integration tests rely on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_absent() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn port_is_read_when_present() {
        let config: Config = serde_json::from_str(r#"{"port": 3005}"#).unwrap();
        assert_eq!(config.port, 3005);
    }
}
