//! Route table

use axum::{
    routing::{delete, get},
    Router,
};

use crate::{
    error::Error,
    health,
    reports::handlers::{create_report, delete_report, list_reports},
    repository::ReportStore,
    state::AppState,
};

/// Build the application router
///
/// Middleware is applied by [`Server::serve`](crate::server::Server::serve).
pub fn router<S: ReportStore>(state: AppState<S>) -> Router {
    Router::new()
        .route("/api", get(health::banner::<S>))
        .route(
            "/api/reports",
            get(list_reports::<S>).post(create_report::<S>),
        )
        .route("/api/reports/{id}", delete(delete_report::<S>))
        .route("/health", get(health::health::<S>))
        .route("/ready", get(health::readiness::<S>))
        .fallback(route_not_found)
        .with_state(state)
}

async fn route_not_found() -> Error {
    Error::NotFound("route not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::store::MemoryReportStore;
    use axum::body::{to_bytes, Body};
    use http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::new(Config::default(), MemoryReportStore::new()))
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let response = app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "message": "route not found"})
        );
    }

    #[tokio::test]
    async fn test_wrong_method() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::PUT)
                    .uri("/api/reports")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
