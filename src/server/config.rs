use std::path::PathBuf;

use crate::server::error::config::ConfigError;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_SEED_DATA_DIR: &str = "data";

pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub seed_data_dir: PathBuf,
    pub seed_on_startup: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let seed_on_startup = match lookup("SEED_ON_STARTUP") {
            None => true,
            Some(value) => parse_flag("SEED_ON_STARTUP", &value)?,
        };

        Ok(Self {
            database_url,
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            seed_data_dir: PathBuf::from(
                lookup("SEED_DATA_DIR").unwrap_or_else(|| DEFAULT_SEED_DATA_DIR.to_string()),
            ),
            seed_on_startup,
        })
    }
}

fn parse_flag(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected `true` or `false`, got `{}`", other),
        }),
    }
}
