use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_SAVANT_BASE_URL: &str = "https://baseballsavant.mlb.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; statcast-api/0.1)";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} is not in the correct format: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: Ipv4Addr,
    pub port: u16,
    /// `None` disables the data source; requests then answer 503.
    pub savant_base_url: Option<String>,
    pub savant_timeout: Duration,
    pub savant_user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_var(&lookup, "HOST", Ipv4Addr::UNSPECIFIED)?;
        let port = parse_var(&lookup, "PORT", 3000u16)?;
        let timeout_secs = parse_var(&lookup, "SAVANT_TIMEOUT_SECS", 15u64)?;

        let savant_base_url = match lookup("SAVANT_BASE_URL") {
            Some(url) => {
                let url = url.trim().trim_end_matches('/');
                (!url.is_empty()).then(|| url.to_string())
            }
            None => Some(DEFAULT_SAVANT_BASE_URL.to_string()),
        };

        let savant_user_agent = lookup("SAVANT_USER_AGENT")
            .map(|ua| ua.trim().to_string())
            .filter(|ua| !ua.is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        Ok(Self {
            host,
            port,
            savant_base_url,
            savant_timeout: Duration::from_secs(timeout_secs),
            savant_user_agent,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
