//! Health check endpoint for container orchestration.
//!
//! Provides a liveness/readiness probe that returns 200 OK whenever the process
//! can answer HTTP. Used by Kubernetes, ECS, systemd, and load balancers.

use axum::Json;
use serde::Serialize;

use crate::config::HEALTH_OK;

/// Body of the health response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

impl HealthStatus {
    pub const fn ok() -> Self {
        Self { status: HEALTH_OK }
    }
}

/// Health check handler.
///
/// Responds with `{"status":"OK"}`. It does not check anything beyond the
/// process being able to respond.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::ok())
}
