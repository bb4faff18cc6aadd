//! Runtime configuration read from the process environment. `main` loads
//! `.env` into the environment first, if the file exists.
//!
//! | Variable              | Default                      |
//! |-----------------------|------------------------------|
//! | `PEOPLE_BIND_ADDR`    | `0.0.0.0:8081`               |
//! | `PEOPLE_STORE_BUFFER` | `32`                         |
//! | `AGIFY_URL`           | `https://api.agify.io`       |
//! | `GENDERIZE_URL`       | `https://api.genderize.io`   |
//! | `NATIONALIZE_URL`     | `https://api.nationalize.io` |

use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8081";
pub const DEFAULT_STORE_BUFFER: usize = 32;
/// Largest store channel capacity accepted.
pub const MAX_STORE_BUFFER: usize = 65_536;
pub const DEFAULT_AGIFY_URL: &str = "https://api.agify.io";
pub const DEFAULT_GENDERIZE_URL: &str = "https://api.genderize.io";
pub const DEFAULT_NATIONALIZE_URL: &str = "https://api.nationalize.io";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} is not a valid socket address: {value}")]
    InvalidAddr { key: &'static str, value: String },

    #[error("{key} must be an integer between 1 and 65536, got {value}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} is not a valid URL: {value}")]
    InvalidUrl { key: &'static str, value: String },
}

/// Base URLs of the three lookup services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentEndpoints {
    pub agify: String,
    pub genderize: String,
    pub nationalize: String,
}

impl Default for EnrichmentEndpoints {
    fn default() -> Self {
        Self {
            agify: DEFAULT_AGIFY_URL.to_string(),
            genderize: DEFAULT_GENDERIZE_URL.to_string(),
            nationalize: DEFAULT_NATIONALIZE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Capacity of the person store's request channel.
    pub store_buffer: usize,
    pub endpoints: EnrichmentEndpoints,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unset or empty keys
    /// take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = {
            let key = "PEOPLE_BIND_ADDR";
            let value = get(key).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
            value
                .parse::<SocketAddr>()
                .map_err(|_| ConfigError::InvalidAddr { key, value })?
        };

        let store_buffer = match get("PEOPLE_STORE_BUFFER") {
            None => DEFAULT_STORE_BUFFER,
            Some(value) => match value.parse::<usize>() {
                Ok(n) if (1..=MAX_STORE_BUFFER).contains(&n) => n,
                _ => {
                    return Err(ConfigError::InvalidNumber {
                        key: "PEOPLE_STORE_BUFFER",
                        value,
                    })
                }
            },
        };

        let url = |key: &'static str, default: &str| -> Result<String, ConfigError> {
            let value = get(key).unwrap_or_else(|| default.to_string());
            match reqwest::Url::parse(&value) {
                Ok(_) => Ok(value),
                Err(_) => Err(ConfigError::InvalidUrl { key, value }),
            }
        };

        Ok(Self {
            bind_addr,
            store_buffer,
            endpoints: EnrichmentEndpoints {
                agify: url("AGIFY_URL", DEFAULT_AGIFY_URL)?,
                genderize: url("GENDERIZE_URL", DEFAULT_GENDERIZE_URL)?,
                nationalize: url("NATIONALIZE_URL", DEFAULT_NATIONALIZE_URL)?,
            },
        })
    }
}
