//! Health check endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::time::Instant;

use crate::app::AppState;
use crate::error::ApiError;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub storage: StorageHealth,
}

/// Storage backend health status.
#[derive(Debug, Serialize)]
pub struct StorageHealth {
    pub backend: String,
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
}

/// Simple status response for liveness/readiness probes.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Probe the storage backend. The in-memory backend is always reachable.
async fn probe_storage(state: &AppState) -> StorageHealth {
    let backend = state.config.database.backend.as_str().to_string();

    let Some(pool) = state.pool.as_ref() else {
        return StorageHealth {
            backend,
            connected: true,
            latency_ms: None,
        };
    };

    let start = Instant::now();
    let connected = persistence::db::ping(pool).await.is_ok();
    persistence::metrics::record_pool_metrics(pool);

    StorageHealth {
        backend,
        connected,
        latency_ms: connected.then(|| start.elapsed().as_millis() as u64),
    }
}

/// Full health check endpoint.
///
/// GET /health
pub async fn health_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let storage = probe_storage(&state).await;
    let (status_code, status) = if storage.connected {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (
        status_code,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            storage,
        }),
    )
}

/// Liveness probe endpoint.
///
/// GET /health/live
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "alive".to_string(),
    })
}

/// Readiness probe endpoint.
///
/// GET /health/ready
pub async fn ready(State(state): State<AppState>) -> Result<Json<StatusResponse>, ApiError> {
    if probe_storage(&state).await.connected {
        Ok(Json(StatusResponse {
            status: "ready".to_string(),
        }))
    } else {
        Err(ApiError::ServiceUnavailable(
            "Database is not reachable".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_health_omits_latency_when_absent() {
        let health = StorageHealth {
            backend: "memory".to_string(),
            connected: true,
            latency_ms: None,
        };
        let json = serde_json::to_string(&health).unwrap();
        assert!(json.contains("\"backend\":\"memory\""));
        assert!(!json.contains("latency_ms"));
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            storage: StorageHealth {
                backend: "postgres".to_string(),
                connected: true,
                latency_ms: Some(3),
            },
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["storage"]["backend"], "postgres");
        assert_eq!(json["storage"]["latency_ms"], 3);
    }
}
