//! Gateway Health API
//!
//! Reports liveness only. Upstream credentials are not consulted.

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Handler for `GET /api/health`
pub async fn get_health() -> Json<HealthReport> {
    Json(HealthReport {
        status: "healthy",
        message: "Menu Visualizer API is running",
        timestamp: Utc::now(),
    })
}
