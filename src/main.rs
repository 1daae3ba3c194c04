//! Deployment smoke-test server: answers every HTTP request with a fixed
//! plain-text body.
//!
//! Behavior:
//! - `PORT` env var overrides the listening port (default 3000)
//! - Binds 0.0.0.0 and logs one line with the bound port
//! - Every method and path gets `200 OK`, `Content-Type: text/plain` and
//!   the same fixed body
//! - Runs until killed; startup failures exit non-zero with the error on
//!   stderr

use smoke_server::{Server, ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("smoke_server=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let server = Server::bind(&config).await?;
    server.serve().await?;
    Ok(())
}
