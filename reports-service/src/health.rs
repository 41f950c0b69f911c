//! Banner and health check handlers

use std::collections::HashMap;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::{repository::ReportStore, state::AppState};

/// `GET /api` response
#[derive(Debug, Serialize, Deserialize)]
pub struct BannerResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service name
    pub service: String,

    /// Version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Readiness check response with dependency status
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Overall readiness status
    pub ready: bool,

    /// Service name
    pub service: String,

    /// Dependency statuses
    pub dependencies: HashMap<String, DependencyStatus>,
}

/// Individual dependency status
#[derive(Debug, Serialize, Deserialize)]
pub struct DependencyStatus {
    /// Dependency is healthy
    pub healthy: bool,

    /// Optional message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Service banner
pub async fn banner<S: ReportStore>(State(state): State<AppState<S>>) -> Json<BannerResponse> {
    Json(BannerResponse {
        message: state.config().service.banner.clone(),
    })
}

/// Simple health check (liveness probe)
///
/// Always returns 200 OK if the service is running.
pub async fn health<S: ReportStore>(State(state): State<AppState<S>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: state.config().service.name.clone(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check (readiness probe)
///
/// Returns 200 OK if the store answers a ping, 503 Service Unavailable otherwise.
pub async fn readiness<S: ReportStore>(State(state): State<AppState<S>>) -> impl IntoResponse {
    let status = match state.store().ping().await {
        Ok(()) => DependencyStatus {
            healthy: true,
            message: Some("Connected".to_string()),
        },
        Err(e) => {
            tracing::error!(
                operation = %e.operation,
                kind = %e.kind,
                "Store health check failed: {}",
                e.message
            );
            DependencyStatus {
                healthy: false,
                message: Some("unavailable".to_string()),
            }
        }
    };

    let ready = status.healthy;
    let response = ReadinessResponse {
        ready,
        service: state.config().service.name.clone(),
        dependencies: HashMap::from([("store".to_string(), status)]),
    };

    let code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::routes::router;
    use crate::store::{MemoryReportStore, UnavailableStore};
    use axum::body::{to_bytes, Body};
    use http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get<S: ReportStore>(state: AppState<S>, uri: &str) -> (StatusCode, Value) {
        let response = router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_banner() {
        let state = AppState::new(Config::default(), MemoryReportStore::new());
        let (status, body) = get(state, "/api").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Community Reports API is running!");
    }

    #[tokio::test]
    async fn test_health() {
        let state = AppState::new(Config::default(), MemoryReportStore::new());
        let (status, body) = get(state, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "reports-service");
    }

    #[tokio::test]
    async fn test_ready_with_memory_store() {
        let state = AppState::new(Config::default(), MemoryReportStore::new());
        let (status, body) = get(state, "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ready"], true);
        assert_eq!(body["dependencies"]["store"]["healthy"], true);
    }

    #[tokio::test]
    async fn test_not_ready_when_store_is_down() {
        let state = AppState::new(Config::default(), UnavailableStore);
        let (status, body) = get(state, "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["ready"], false);
        assert_eq!(body["dependencies"]["store"]["message"], "unavailable");
    }

    #[tokio::test]
    async fn test_store_outage_on_listing_is_500() {
        let state = AppState::new(Config::default(), UnavailableStore);
        let (status, body) = get(state, "/api/reports").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "database operation failed");
    }
}
