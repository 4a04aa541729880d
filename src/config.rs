use crate::infrastructure::providers::{abstract_timezone, nager_date};
use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub abstract_timezone_api_key: Option<String>,
    pub abstract_timezone_base_url: String,
    pub nager_date_base_url: String,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let server_port = parse_port(env::var("SERVER_PORT").ok().as_deref())?;

        // Checked on first timezone lookup, not here
        let abstract_timezone_api_key = env::var("ABSTRACT_TIMEZONE_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let abstract_timezone_base_url = env::var("ABSTRACT_TIMEZONE_BASE_URL")
            .unwrap_or_else(|_| abstract_timezone::DEFAULT_BASE_URL.to_string());

        let nager_date_base_url = env::var("NAGER_DATE_BASE_URL")
            .unwrap_or_else(|_| nager_date::DEFAULT_BASE_URL.to_string());

        let http_timeout = parse_timeout(env::var("HTTP_TIMEOUT_SECS").ok().as_deref())?;

        Ok(Config {
            server_host,
            server_port,
            abstract_timezone_api_key,
            abstract_timezone_base_url,
            nager_date_base_url,
            http_timeout,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    raw.unwrap_or("3000")
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidPort)
}

fn parse_timeout(raw: Option<&str>) -> Result<Duration, ConfigError> {
    match raw.unwrap_or("30").trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("HTTP_TIMEOUT_SECS must be a positive number of seconds")]
    InvalidTimeout,
}
