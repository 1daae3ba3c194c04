//! Error types for configuration resolution and the server lifecycle.

use std::net::SocketAddr;
use thiserror::Error;

/// Everything that can go wrong between process start and the accept loop.
///
/// All of these are terminal: the binary propagates them out of `main` so the
/// process exits non-zero with the error chain on stderr.
#[derive(Debug, Error)]
pub enum ServerError {
    /// `PORT` was set to a non-empty value that is not a port number.
    #[error("invalid PORT value {value:?}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },

    /// The configured bind host is not a valid IP address.
    #[error("invalid bind host {host:?}")]
    InvalidHost {
        host: String,
        source: std::net::AddrParseError,
    },

    /// Binding the listener failed, e.g. the port is already in use.
    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// The accept loop itself failed at the I/O level.
    #[error("server I/O error")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ServerError>;
