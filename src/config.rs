//! Runtime configuration loaded from the environment

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;

/// Environment variable holding the listen port
pub const PORT_VAR: &str = "PORT";
/// Environment variable holding the allowed CORS origin
pub const CORS_ORIGIN_VAR: &str = "CORS_ORIGIN";
/// Environment variable holding the bind address
pub const HOST_VAR: &str = "HOST";

const DEFAULT_CORS_ORIGIN: &str = "*";
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Startup configuration errors. Any of these stops the process.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: PORT")]
    MissingPort,

    #[error("Environment variable PORT must be a valid positive integer, got {0:?}")]
    InvalidPort(String),

    #[error("Environment variable HOST must be an IP address, got {0:?}")]
    InvalidHost(String),

    #[error("Environment variable CORS_ORIGIN is not a valid header value: {0:?}")]
    InvalidCorsOrigin(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub cors_origin: HeaderValue,
}

impl Config {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = lookup(PORT_VAR)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingPort)
            .and_then(|raw| parse_port(&raw))?;

        let host = match lookup(HOST_VAR).filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            None => DEFAULT_HOST,
        };

        let cors_origin = match lookup(CORS_ORIGIN_VAR).filter(|v| !v.is_empty()) {
            Some(raw) => {
                HeaderValue::from_str(&raw).map_err(|_| ConfigError::InvalidCorsOrigin(raw))?
            }
            None => HeaderValue::from_static(DEFAULT_CORS_ORIGIN),
        };

        Ok(Self {
            host,
            port,
            cors_origin,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(raw.to_string())),
    }
}
