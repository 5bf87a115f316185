use crate::error::ConfigError;
use crate::security::{Credentials, StoredPassword};
use std::env;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_USERNAME: &str = "user";
pub const DEFAULT_PASSWORD: &str = "{noop}pass";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub credentials: Credentials,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let username = lookup("SECURITY_USER_NAME").unwrap_or_else(|| DEFAULT_USERNAME.to_string());
        if username.is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        let password = lookup("SECURITY_USER_PASSWORD")
            .unwrap_or_else(|| DEFAULT_PASSWORD.to_string());
        let password = StoredPassword::parse(&password)?;

        Ok(Config {
            host,
            port,
            credentials: Credentials::new(username, password),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
