// Module declarations for the library crate; the binary and the integration
// tests both drive the server through these.

pub mod config;
pub mod error;
pub mod server;

pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use server::{Server, RESPONSE_BODY};
