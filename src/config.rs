use std::env;
use std::fmt;
use validator::{Validate, ValidationErrors};

use crate::utils::validation::validate_payload;

const DEFAULT_DATABASE_URL: &str = "sqlite://employees.db";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    InvalidPort(String),
    Invalid(ValidationErrors),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(name) => write!(f, "{} must be set", name),
            ConfigError::InvalidPort(value) => write!(f, "PORT is not a valid port: {}", value),
            ConfigError::Invalid(errors) => write!(f, "invalid configuration: {}", errors),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, Validate)]
pub struct Config {
    #[validate(length(min = 1))]
    pub secret_key: String,
    #[validate(length(min = 1))]
    pub database_url: String,
    #[validate(length(min = 1))]
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads `SECRET_KEY`, `DATABASE_URL`, `HOST` and `PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("SECRET_KEY").ok_or(ConfigError::Missing("SECRET_KEY"))?;
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        let config = Config {
            secret_key,
            database_url,
            host,
            port,
        };
        validate_payload(&config).map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
