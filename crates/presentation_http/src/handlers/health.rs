//! Health check handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness check - is the server running?
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub generation: ServiceStatus,
    pub scoring: ServiceStatus,
}

/// Status of a backend service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Readiness check - are the generation and scoring backends reachable?
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let generation_healthy = state.inference.is_healthy().await;
    let scoring_healthy = state.scoring.is_healthy().await;

    let model = if generation_healthy {
        Some(state.inference.current_model())
    } else {
        None
    };

    let ready = generation_healthy && scoring_healthy;
    let status_code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(ReadinessResponse {
            ready,
            generation: ServiceStatus {
                healthy: generation_healthy,
                model,
            },
            scoring: ServiceStatus {
                healthy: scoring_healthy,
                model: None,
            },
        }),
    )
}
