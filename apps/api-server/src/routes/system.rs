//! Landing page and health check.

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::AppState;

const INDEX_HTML: &str = include_str!("../../templates/index.html");

/// System routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

/// Health check payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
    pub timestamp: String,
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: state.config.service_name.clone(),
        timestamp: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use axum::http::{header, Method, StatusCode};

    use crate::routes::test_support::{seeded_router, send};

    #[tokio::test]
    async fn test_health_check() {
        let router = seeded_router();
        let res = send(&router, Method::GET, "/health", None).await;

        assert_eq!(res.status, StatusCode::OK);
        let body = res.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "devops-testing-app");
        assert!(body["timestamp"].as_str().is_some_and(|ts| !ts.is_empty()));
    }

    #[tokio::test]
    async fn test_index_page() {
        let router = seeded_router();
        let res = send(&router, Method::GET, "/", None).await;

        assert_eq!(res.status, StatusCode::OK);
        let content_type = res.headers[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        let page = res.text();
        assert!(page.contains("DevOps Testing Application"));
        assert!(page.contains("Users API"));
        assert!(page.contains("Products API"));
    }
}
