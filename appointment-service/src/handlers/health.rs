use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::server::AppointmentService;

/// Health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub checks: HashMap<String, String>,
}

/// Version information response
#[derive(Debug, Serialize, ToSchema)]
pub struct VersionResponse {
    pub name: String,
    pub version: String,
}

/// Health check handler
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Service is unhealthy")
    ),
    tag = "health"
)]
pub async fn health_check(
    State(service): State<AppointmentService>,
) -> Result<Json<HealthResponse>, StatusCode> {
    let mut checks = HashMap::new();

    let database_healthy = database_layer::ping(&service.db_pool).await;
    checks.insert(
        "database".to_string(),
        if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
    );

    let response = HealthResponse {
        status: if database_healthy { "healthy" } else { "degraded" }.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks,
    };

    Ok(Json(response))
}

/// Version information handler
#[utoipa::path(
    get,
    path = "/version",
    responses(
        (status = 200, description = "Version information", body = VersionResponse)
    ),
    tag = "health"
)]
pub async fn version_info() -> Json<VersionResponse> {
    Json(VersionResponse {
        name: "MediTrack Appointment Scheduling Service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
