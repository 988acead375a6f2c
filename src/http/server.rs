//! HTTP server startup logic.

use std::net::{IpAddr, SocketAddr};

use axum::Router;
use tokio::net::TcpListener;

use crate::config::AppConfig;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid http.host '{host}': {source}")]
    Address {
        host: String,
        source: std::net::AddrParseError,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Socket address for `http.host` and `http.port`. IPv6 hosts are given bare (`::1`).
pub fn bind_addr(config: &AppConfig) -> Result<SocketAddr, ServerError> {
    let ip: IpAddr = config
        .http
        .host
        .parse()
        .map_err(|source| ServerError::Address {
            host: config.http.host.clone(),
            source,
        })?;
    Ok(SocketAddr::new(ip, config.http.port))
}

/// Bind the configured address and serve `app` on it.
///
/// This function blocks until the server stops.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = bind_addr(config)?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    serve(listener, app).await
}

/// Serve `app` on an already bound listener.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "Starting HTTP server");

    axum::serve(listener, app).await?;
    Ok(())
}
