//! Startup errors.
//!
//! Request-level failures (unknown paths, wrong methods) are answered by
//! axum's own 404/405 responses and never reach application code.

use crate::config::ConfigError;
use crate::http::ServerError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Server error: {0}")]
    Server(#[from] ServerError),
}
