//! The static responder: one fixed plain-text answer for every request.
//!
//! Used as a deploy smoke test / liveness target (e.g. behind a Kubernetes
//! probe). There is no routing and no state; any method on any path gets
//! the same `200 OK`.

use std::net::SocketAddr;

use axum::http::header;
use axum::response::IntoResponse;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;
use crate::error::{Result, ServerError};

/// The fixed response body, byte for byte.
pub const RESPONSE_BODY: &str = "App rodando via Jenkins + Kubernetes 🚀";

/// A bound listener ready to serve.
///
/// Bind failures surface at startup, before [`Server::serve`] runs, and
/// [`Server::local_addr`] reports the actual port when port 0 was requested.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    addr: SocketAddr,
}

impl Server {
    /// Bind the listening socket described by `config`.
    ///
    /// Logs one line with the bound port on success. Fails if the host does
    /// not parse or the address cannot be bound (port taken, interface
    /// unavailable).
    pub async fn bind(config: &ServerConfig) -> Result<Server> {
        let addr = config.bind_addr()?;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        let addr = listener.local_addr()?;
        info!(port = addr.port(), "listening on {addr}");
        Ok(Server { listener, addr })
    }

    /// The address actually bound (resolves the port when 0 was requested).
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Accept and answer requests until the process is killed.
    ///
    /// There is no shutdown trigger; this only returns if the accept loop
    /// itself fails.
    pub async fn serve(self) -> Result<()> {
        axum::serve(self.listener, router()).await?;
        Ok(())
    }
}

/// Build the request-handling service: no routes, only a catch-all, so every
/// method and path produces the identical response.
pub fn router() -> Router {
    Router::new()
        .fallback(respond)
        .layer(TraceLayer::new_for_http())
}

/// Answer anything with 200, `Content-Type: text/plain` and the fixed body.
async fn respond() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], RESPONSE_BODY)
}
