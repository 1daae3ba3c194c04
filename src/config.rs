//! Listening configuration, resolved once at startup.
//!
//! Environment access is confined to [`ServerConfig::from_env`]; the rest of
//! the crate only ever sees the immutable struct built here.

use std::net::{IpAddr, SocketAddr};

use crate::error::{Result, ServerError};

/// Environment variable that overrides the listening port.
pub const PORT_ENV_VAR: &str = "PORT";

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind host: all interfaces.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Immutable listening configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind, as an IP address string.
    pub host: String,
    /// TCP port to listen on. Port 0 asks the OS for an ephemeral port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Resolve the configuration from the process environment.
    ///
    /// `PORT` overrides the default port when present and non-empty. A
    /// non-empty value that does not parse as a port number is a startup
    /// error.
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var(PORT_ENV_VAR) {
            Ok(raw) => parse_port(&raw)?,
            // Unset (or non-unicode) falls back to the default.
            Err(_) => DEFAULT_PORT,
        };
        Ok(ServerConfig {
            port,
            ..ServerConfig::default()
        })
    }

    /// The socket address to bind, from the configured host and port.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let host: IpAddr = self
            .host
            .parse()
            .map_err(|source| ServerError::InvalidHost {
                host: self.host.clone(),
                source,
            })?;
        Ok(SocketAddr::from((host, self.port)))
    }
}

fn parse_port(raw: &str) -> Result<u16> {
    if raw.is_empty() {
        return Ok(DEFAULT_PORT);
    }
    raw.parse().map_err(|source| ServerError::InvalidPort {
        value: raw.to_string(),
        source,
    })
}
