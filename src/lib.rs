//! greeting-service: a greeting endpoint and a health probe.
//!
//! `GET /` answers with a plain-text greeting and `GET /health` with
//! `{"status":"OK"}` for container liveness and readiness checks.

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;

pub use error::AppError;
